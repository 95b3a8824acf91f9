//! Console handoff channel.
//!
//! Prints the composed message so the operator can forward it by hand.

use std::io::Write;

use parking_lot::Mutex;
use tracing::info;

use crate::error::{HandoffError, Result};
use crate::port::outbound::handoff::{Handoff, HandoffMessage};

/// Writes handoff messages to a text sink (stdout by default).
pub struct ConsoleHandoff {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleHandoff {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    #[must_use]
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl Handoff for ConsoleHandoff {
    fn name(&self) -> &'static str {
        "console"
    }

    fn deliver(&self, message: &HandoffMessage) -> Result<()> {
        let mut sink = self.sink.lock();
        writeln!(sink, "Para: +{}\n\n{}", message.recipient, message.body)
            .and_then(|()| sink.flush())
            .map_err(|e| HandoffError::Delivery(e.to_string()))?;
        info!(recipient = %message.recipient, "Handoff printed");
        Ok(())
    }
}
