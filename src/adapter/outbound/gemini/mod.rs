//! Gemini adapter for the quote provider port.

pub mod client;
mod payload;
