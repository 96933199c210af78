//! Compose-and-send state.
//!
//! The [`Composer`] is the single owner of the session's [`MessageLog`].
//! It holds the transient caller-side state (identity selection, custom
//! name, thread label, draft) and turns a send into resolve, append and
//! emit.

use tracing::debug;

use collective_shared::clock::{Clock, IdGenerator, SystemClock, TimestampIds};
use collective_shared::constants::{BROADCAST_RECIPIENT, DEFAULT_THREAD};
use collective_shared::identity::{self, EntitySelection};
use collective_shared::{Message, RejectionReason};
use collective_store::MessageLog;

use crate::config::{parse_thread, ClientConfig};
use crate::error::ConfigError;
use crate::sink::ProtocolSink;
use crate::transcript::{self, TranscriptEntry};

pub struct Composer<S, C = SystemClock, G = TimestampIds> {
    log: MessageLog<C, G>,
    sink: S,
    selection: EntitySelection,
    custom_name: String,
    thread: String,
    draft: String,
}

impl<S: ProtocolSink> Composer<S> {
    /// Start a session with a fresh log and default selection.
    pub fn new(sink: S) -> Self {
        Self::with_log(MessageLog::new(), sink)
    }
}

impl<S: ProtocolSink> Composer<S, SystemClock, Box<dyn IdGenerator>> {
    /// Start a session from configuration: initial sender, thread and id
    /// scheme.
    pub fn from_config(config: &ClientConfig, sink: S) -> Self {
        let log = MessageLog::with_sources(SystemClock, config.id_scheme.generator());
        let mut composer = Self::with_log(log, sink);
        composer.select(&config.default_entity);
        composer.thread = config.thread.clone();
        composer
    }
}

impl<S: ProtocolSink, C: Clock, G: IdGenerator> Composer<S, C, G> {
    pub fn with_log(log: MessageLog<C, G>, sink: S) -> Self {
        Self {
            log,
            sink,
            selection: EntitySelection::default(),
            custom_name: String::new(),
            thread: DEFAULT_THREAD.to_string(),
            draft: String::new(),
        }
    }

    /// Pick a core-network identity. Leaves custom mode.
    pub fn select_roster(&mut self, name: &str) {
        self.selection = EntitySelection::Roster(name.to_string());
        self.custom_name.clear();
    }

    /// Pick a guest category. Leaves custom mode.
    pub fn select_guest(&mut self, name: &str) {
        self.selection = EntitySelection::Guest(name.to_string());
        self.custom_name.clear();
    }

    /// Switch to custom mode; the custom name field keeps its text.
    pub fn select_custom(&mut self) {
        self.selection = EntitySelection::Custom(String::new());
    }

    /// Select by name: roster and guest names select their entry, anything
    /// else becomes the custom name.
    pub fn select(&mut self, name: &str) {
        match EntitySelection::classify(name.trim()) {
            EntitySelection::Roster(name) => self.select_roster(&name),
            EntitySelection::Guest(name) => self.select_guest(&name),
            EntitySelection::Custom(name) => {
                self.select_custom();
                self.custom_name = name;
            }
        }
    }

    pub fn set_custom_name(&mut self, raw: impl Into<String>) {
        self.custom_name = raw.into();
    }

    pub fn set_thread(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.thread = parse_thread(raw)?;
        Ok(())
    }

    pub fn set_draft(&mut self, raw: impl Into<String>) {
        self.draft = raw.into();
    }

    /// The name the next message would be sent as.
    pub fn sender(&self) -> String {
        identity::resolve(&self.selection, &self.custom_name)
    }

    /// Send the current draft to everyone on the current thread.
    ///
    /// On success the draft is cleared and the protocol line goes to the
    /// sink. On rejection the draft is kept and nothing is emitted.
    pub fn send(&mut self) -> Result<Message, RejectionReason> {
        let entity = self.sender();
        let accepted = self.log.append(
            &entity,
            Some(BROADCAST_RECIPIENT),
            Some(self.thread.as_str()),
            &self.draft,
        )?;

        self.sink.emit(&accepted.line);
        self.draft.clear();

        debug!(msg_id = %accepted.message.id, "Message sent");
        Ok(accepted.message)
    }

    /// Set the draft and send it in one step.
    pub fn send_text(&mut self, raw: impl Into<String>) -> Result<Message, RejectionReason> {
        self.set_draft(raw);
        self.send()
    }

    pub fn log(&self) -> &MessageLog<C, G> {
        &self.log
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn selection(&self) -> &EntitySelection {
        &self.selection
    }

    pub fn custom_name(&self) -> &str {
        &self.custom_name
    }

    pub fn thread(&self) -> &str {
        &self.thread
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The whole history, rendered for display.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        transcript::render(self.log.messages())
    }
}
