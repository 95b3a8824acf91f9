//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (quote lookups, settings backends, messaging channels).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Quote  │            │  Settings   │              │  Handoff  │
//! │ Adapter │            │  Adapters   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::quote`] - Exchange-rate lookups
//! - [`outbound::settings`] - Remote and local settings persistence
//! - [`outbound::handoff`] - Transaction handoff to a messaging channel
//! - [`inbound::access`] - Access-code validation
//! - [`inbound::config`] - Configuration inspection

pub mod inbound;
pub mod outbound;
