//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the rate-quote
//! provider, settings persistence, and the handoff channel.

pub mod handoff;
pub mod quote;
pub mod settings;
