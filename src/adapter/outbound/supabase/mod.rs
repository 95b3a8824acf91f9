//! Supabase adapter for the remote settings port.

pub mod client;
