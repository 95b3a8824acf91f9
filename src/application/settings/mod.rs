//! Settings persistence use cases.

pub mod service;
