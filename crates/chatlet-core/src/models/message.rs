use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display format for message timestamps: 24-hour `HH:MM`.
const TIMESTAMP_FORMAT: &str = "%H:%M";

/// A single record in the widget transcript.
///
/// The timestamp is captured when the record is created and is meant for
/// display only. It does not sort or parse back into a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

impl Message {
    /// A user-authored message stamped with the current local time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::at(text, Sender::User, &jiff::Zoned::now())
    }

    /// A responder-authored message stamped with the current local time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::at(text, Sender::Bot, &jiff::Zoned::now())
    }

    /// Build a message stamped with an explicit wall-clock time.
    pub fn at(text: impl Into<String>, sender: Sender, now: &jiff::Zoned) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: format_timestamp(now),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Format a wall-clock time the way the widget displays it (`14:05`).
pub fn format_timestamp(time: &jiff::Zoned) -> String {
    time.strftime(TIMESTAMP_FORMAT).to_string()
}
