//! Handoff channels.

pub mod console;
