use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PROTOCOL_VERSION;

/// A single accepted chat message. Never mutated after the log stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the process run.
    pub id: String,
    /// Resolved sender name.
    pub entity: String,
    /// Recipient; `"All"` for broadcast.
    pub to: String,
    /// Flat thread label.
    pub thread: String,
    /// Body exactly as composed (not trimmed).
    pub content: String,
    /// Set by the log when the message was accepted.
    pub timestamp: DateTime<Utc>,
}

/// The canonical one-line wire encoding of a [`Message`]:
///
/// ```text
/// [entity=<entity>] [to=<to>] [thread=<thread>] [v=1] :: <content>
/// ```
///
/// Field values are written verbatim. Brackets, `::` and newlines inside
/// them are not escaped, so the format is write-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtocolLine(String);

impl ProtocolLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProtocolLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProtocolLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a message as its protocol line.
pub fn encode(message: &Message) -> ProtocolLine {
    ProtocolLine(format!(
        "[entity={}] [to={}] [thread={}] [v={}] :: {}",
        message.entity, message.to, message.thread, PROTOCOL_VERSION, message.content
    ))
}

impl Message {
    pub fn encode(&self) -> ProtocolLine {
        encode(self)
    }
}
