//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`quote`] - [`ScriptedQuoteProvider`](quote::ScriptedQuoteProvider) and
//!   quote builders.
//! - [`settings`] - Mock settings backends: `ScriptedRemote`, `BrokenSlot`,
//!   `MemorySlot`.
//! - [`handoff`] - `RecordingHandoff`, which keeps every delivered message.

pub mod handoff;
pub mod quote;
pub mod settings;
