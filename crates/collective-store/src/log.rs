//! Append-only message log.
//!
//! A fresh [`MessageLog`] holds exactly one message, the system welcome
//! announcement, stamped at creation time. It then grows only through
//! [`MessageLog::append`]. Readers that need a stable view take
//! [`MessageLog::len`] first and read [`MessageLog::prefix`]; since the log
//! only grows, any prefix stays valid.

use chrono::{DateTime, Utc};
use tracing::debug;

use collective_shared::clock::{Clock, IdGenerator, SystemClock, TimestampIds};
use collective_shared::constants::{
    BROADCAST_RECIPIENT, DEFAULT_THREAD, SYSTEM_ENTITY, WELCOME_CONTENT, WELCOME_ID,
};
use collective_shared::protocol::{encode, Message, ProtocolLine};
use collective_shared::RejectionReason;

use crate::error::Result;

/// A message the log accepted, with its protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub message: Message,
    pub line: ProtocolLine,
}

/// Ordered, append-only sequence of messages.
///
/// Insertion order is display order and protocol emission order.
pub struct MessageLog<C = SystemClock, G = TimestampIds> {
    messages: Vec<Message>,
    clock: C,
    ids: G,
}

impl MessageLog {
    /// Create a log backed by the wall clock and time-derived ids.
    pub fn new() -> Self {
        Self::with_sources(SystemClock, TimestampIds::default())
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGenerator> MessageLog<C, G> {
    /// Create a log using the given clock and id generator, seeded with the
    /// welcome message.
    pub fn with_sources(clock: C, ids: G) -> Self {
        let created_at = clock.now();
        let welcome = Message {
            id: WELCOME_ID.to_string(),
            entity: SYSTEM_ENTITY.to_string(),
            to: BROADCAST_RECIPIENT.to_string(),
            thread: DEFAULT_THREAD.to_string(),
            content: WELCOME_CONTENT.to_string(),
            timestamp: created_at,
        };

        Self {
            messages: vec![welcome],
            clock,
            ids,
        }
    }

    /// Validate and append a message.
    ///
    /// `to` falls back to the broadcast recipient when `None`. `thread`
    /// falls back to `"General"` when `None` or blank. The content is
    /// stored exactly as given; trimming only decides whether it is empty.
    pub fn append(
        &mut self,
        entity: &str,
        to: Option<&str>,
        thread: Option<&str>,
        raw_content: &str,
    ) -> std::result::Result<Accepted, RejectionReason> {
        if raw_content.trim().is_empty() {
            debug!(reason = %RejectionReason::EmptyContent, "Append rejected");
            return Err(RejectionReason::EmptyContent);
        }
        if entity.trim().is_empty() {
            debug!(reason = %RejectionReason::EmptyEntity, "Append rejected");
            return Err(RejectionReason::EmptyEntity);
        }

        let to = to.unwrap_or(BROADCAST_RECIPIENT);
        let thread = match thread {
            Some(label) if !label.trim().is_empty() => label,
            _ => DEFAULT_THREAD,
        };

        let timestamp = self.clock.now();
        let message = Message {
            id: self.ids.next_id(timestamp),
            entity: entity.to_string(),
            to: to.to_string(),
            thread: thread.to_string(),
            content: raw_content.to_string(),
            timestamp,
        };
        let line = encode(&message);

        debug!(
            msg_id = %message.id,
            entity = %message.entity,
            thread = %message.thread,
            len = self.messages.len() + 1,
            "Message appended"
        );

        self.messages.push(message.clone());
        Ok(Accepted { message, line })
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Number of stored messages. Never less than one.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`: the welcome message is present from creation.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The first `len` messages, clamped to what the log holds.
    pub fn prefix(&self, len: usize) -> &[Message] {
        &self.messages[..len.min(self.messages.len())]
    }

    /// Messages appended after a reader last saw `seen` of them.
    pub fn since(&self, seen: usize) -> &[Message] {
        &self.messages[seen.min(self.messages.len())..]
    }

    /// Messages carrying the given thread label, in append order.
    pub fn in_thread<'a>(&'a self, thread: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.thread == thread)
    }

    /// Timestamp of the welcome message, i.e. when the log was created.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.messages.first().map(|m| m.timestamp)
    }

    /// Re-encode every stored message, in order.
    pub fn protocol_lines(&self) -> Vec<ProtocolLine> {
        self.messages.iter().map(encode).collect()
    }

    /// Export the transcript as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}

impl<'a, C, G> IntoIterator for &'a MessageLog<C, G> {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use collective_shared::clock::{FixedClock, SequentialIds};

    fn test_log() -> MessageLog<FixedClock, SequentialIds> {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        MessageLog::with_sources(FixedClock(at), SequentialIds::new("m"))
    }

    #[test]
    fn test_seeded_with_welcome() {
        let log = test_log();
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());

        let welcome = &log.messages()[0];
        assert_eq!(welcome.id, "welcome");
        assert_eq!(welcome.entity, "System");
        assert_eq!(welcome.to, "All");
        assert_eq!(welcome.thread, "General");
        assert_eq!(welcome.content, WELCOME_CONTENT);
        assert_eq!(log.created_at(), Some(welcome.timestamp));
    }

    #[test]
    fn test_append_grows_by_one_in_order() {
        let mut log = test_log();
        for (i, body) in ["one", "two", "three"].iter().enumerate() {
            let before = log.len();
            log.append("Sage", None, None, body).unwrap();
            assert_eq!(log.len(), before + 1);
            assert_eq!(log.last().unwrap().content, *body);
            assert_eq!(log.len(), i + 2);
        }

        let contents: Vec<&str> = log.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents[1..], ["one", "two", "three"]);
    }

    #[test]
    fn test_blank_content_rejected_without_append() {
        let mut log = test_log();
        for blank in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(
                log.append("Sage", None, None, blank),
                Err(RejectionReason::EmptyContent)
            );
        }
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_content_stored_untrimmed() {
        let mut log = test_log();
        let accepted = log.append("Sage", None, None, "  hello  ").unwrap();
        assert_eq!(accepted.message.content, "  hello  ");
        assert_eq!(log.last().unwrap().content, "  hello  ");
    }

    #[test]
    fn test_empty_entity_rejected() {
        let mut log = test_log();
        log.append("Rork", Some("All"), Some("General"), "status?")
            .unwrap();
        assert_eq!(log.len(), 2);

        let result = log.append("", Some("All"), Some("General"), "ok");
        assert_eq!(result, Err(RejectionReason::EmptyEntity));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_content_checked_before_entity() {
        let mut log = test_log();
        assert_eq!(
            log.append("", None, None, "  "),
            Err(RejectionReason::EmptyContent)
        );
    }

    #[test]
    fn test_defaults_for_recipient_and_thread() {
        let mut log = test_log();
        let accepted = log.append("Lucid", None, None, "hi").unwrap();
        assert_eq!(accepted.message.to, "All");
        assert_eq!(accepted.message.thread, "General");

        let blank_thread = log.append("Lucid", Some("Kepler"), Some("  "), "hi").unwrap();
        assert_eq!(blank_thread.message.to, "Kepler");
        assert_eq!(blank_thread.message.thread, "General");
    }

    #[test]
    fn test_log_assigns_id_and_timestamp() {
        let mut log = test_log();
        let first = log.append("Argo", None, None, "a").unwrap();
        let second = log.append("Argo", None, None, "b").unwrap();
        assert_eq!(first.message.id, "m-1");
        assert_eq!(second.message.id, "m-2");
        assert_eq!(first.message.timestamp, log.created_at().unwrap());
    }

    #[test]
    fn test_accepted_line_matches_message() {
        let mut log = test_log();
        let accepted = log
            .append("Sage", Some("All"), Some("General"), "hi")
            .unwrap();
        assert_eq!(
            accepted.line.as_str(),
            "[entity=Sage] [to=All] [thread=General] [v=1] :: hi"
        );
        assert_eq!(accepted.line, encode(log.last().unwrap()));
    }

    #[test]
    fn test_prefix_stays_valid_after_append() {
        let mut log = test_log();
        log.append("Rork", None, None, "one").unwrap();
        let seen = log.len();
        let snapshot: Vec<Message> = log.prefix(seen).to_vec();

        log.append("Rork", None, None, "two").unwrap();
        assert_eq!(log.prefix(seen), snapshot.as_slice());
        assert_eq!(log.since(seen).len(), 1);
        assert_eq!(log.since(seen)[0].content, "two");
        assert_eq!(log.prefix(100).len(), 3);
        assert!(log.since(100).is_empty());
    }

    #[test]
    fn test_in_thread_filters() {
        let mut log = test_log();
        log.append("Sage", None, Some("Dreams"), "a").unwrap();
        log.append("Sage", None, None, "b").unwrap();
        log.append("Sage", None, Some("Dreams"), "c").unwrap();

        let dreams: Vec<&str> = log.in_thread("Dreams").map(|m| m.content.as_str()).collect();
        assert_eq!(dreams, ["a", "c"]);
        assert_eq!(log.in_thread("General").count(), 2);
    }

    #[test]
    fn test_protocol_lines_include_welcome() {
        let mut log = test_log();
        log.append("Kepler", None, None, "orbit").unwrap();
        let lines = log.protocol_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].as_str().starts_with("[entity=System] [to=All]"));
        assert_eq!(
            lines[1].as_str(),
            "[entity=Kepler] [to=All] [thread=General] [v=1] :: orbit"
        );
    }

    #[test]
    fn test_json_export() {
        let mut log = test_log();
        log.append("Rork", None, None, "status?").unwrap();
        let json = log.to_json().unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log.messages());
    }

    #[test]
    fn test_default_log_uses_unique_ids() {
        let mut log = MessageLog::new();
        let a = log.append("Sage", None, None, "a").unwrap();
        let b = log.append("Sage", None, None, "b").unwrap();
        assert_ne!(a.message.id, b.message.id);
    }
}
