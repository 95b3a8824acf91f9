//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the desk's use cases.

pub mod access;
pub mod desk;
pub mod handoff;
pub mod quote;
pub mod settings;
