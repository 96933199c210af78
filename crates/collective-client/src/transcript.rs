//! Read-only view of the log for display.

use std::fmt;

use chrono::{Local, TimeZone};
use serde::Serialize;

use collective_shared::Message;

/// One rendered history entry: who, what, and the local time-of-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub id: String,
    pub entity: String,
    pub thread: String,
    pub content: String,
    /// `HH:MM:SS` in the viewer's time zone.
    pub time: String,
}

impl TranscriptEntry {
    pub fn from_message(message: &Message) -> Self {
        Self::from_message_in(message, &Local)
    }

    pub fn from_message_in<Tz>(message: &Message, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: message.id.clone(),
            entity: message.entity.clone(),
            thread: message.thread.clone(),
            content: message.content.clone(),
            time: message
                .timestamp
                .with_timezone(tz)
                .format("%H:%M:%S")
                .to_string(),
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} #{}", self.entity, self.thread)?;
        for line in self.content.lines() {
            writeln!(f, "  {line}")?;
        }
        write!(f, "{:>width$}", self.time, width = 10)
    }
}

/// Render messages in the order given.
pub fn render<'a, I>(messages: I) -> Vec<TranscriptEntry>
where
    I: IntoIterator<Item = &'a Message>,
{
    messages
        .into_iter()
        .map(TranscriptEntry::from_message)
        .collect()
}
