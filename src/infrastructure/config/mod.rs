//! Infrastructure configuration modules.

pub mod access;
pub mod logging;
pub mod quote;
pub mod settings;
pub mod store;
