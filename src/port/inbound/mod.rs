//! Inbound ports (driving side): capabilities offered to inbound adapters.

pub mod access;
pub mod config;
