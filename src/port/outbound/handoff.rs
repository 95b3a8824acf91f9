//! Handoff port for confirmed transactions.
//!
//! A handoff externalizes a finished transaction to a messaging channel
//! where it is settled by hand. Delivery is fire-and-forget: no receipt is
//! ever observed.

use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// A composed message ready for an external channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffMessage {
    /// Channel-specific recipient (a phone number for chat apps).
    pub recipient: String,
    /// Plain-text message body.
    pub body: String,
}

/// Sink for composed handoff messages.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `deliver` should return once the message has left the process
pub trait Handoff: Send + Sync {
    /// Return the channel name for logging.
    fn name(&self) -> &'static str;

    /// Deliver a message.
    fn deliver(&self, message: &HandoffMessage) -> Result<()>;
}

/// A no-op handoff for testing or when delivery is disabled.
pub struct NullHandoff;

impl Handoff for NullHandoff {
    fn name(&self) -> &'static str {
        "null"
    }

    fn deliver(&self, _message: &HandoffMessage) -> Result<()> {
        Ok(())
    }
}

/// A handoff that records messages via tracing.
pub struct LogHandoff;

impl Handoff for LogHandoff {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&self, message: &HandoffMessage) -> Result<()> {
        info!(
            recipient = %message.recipient,
            chars = message.body.chars().count(),
            "Handoff message delivered"
        );
        Ok(())
    }
}
