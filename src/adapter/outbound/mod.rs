//! Outbound adapters (driven side).

pub mod gemini;
pub mod handoff;
pub mod local;
pub mod supabase;
