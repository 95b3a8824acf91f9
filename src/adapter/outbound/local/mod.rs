//! Local settings slot.

pub mod file;
