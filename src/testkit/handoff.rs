//! Recording handoff sink.

use parking_lot::Mutex;

use crate::error::Result;
use crate::port::outbound::handoff::{Handoff, HandoffMessage};

/// Keeps every delivered message for later assertions.
#[derive(Default)]
pub struct RecordingHandoff {
    messages: Mutex<Vec<HandoffMessage>>,
}

impl RecordingHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<HandoffMessage> {
        self.messages.lock().clone()
    }
}

impl Handoff for RecordingHandoff {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn deliver(&self, message: &HandoffMessage) -> Result<()> {
        self.messages.lock().push(message.clone());
        Ok(())
    }
}
