//! The transcript store: an ordered, append-only list of messages.
//!
//! Lives in memory for as long as the widget session that owns it. Records
//! are never edited or removed, and the only ordering is insertion order.

use serde::Serialize;

use crate::error::CoreError;
use crate::models::message::{Message, Sender};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the transcript.
    ///
    /// User records with empty or whitespace-only text are rejected and
    /// nothing is added. Bot records are taken as-is.
    pub fn append(&mut self, message: Message) -> Result<(), CoreError> {
        if message.sender == Sender::User && message.text.trim().is_empty() {
            return Err(CoreError::EmptyMessage);
        }
        self.messages.push(message);
        Ok(())
    }

    /// Every record, oldest first.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Serialize the transcript as a JSON array for a web host.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.messages)?)
    }
}
