//! Injectable time and id sources.
//!
//! The log stamps every accepted message itself. Production code uses
//! [`SystemClock`] with [`TimestampIds`]; tests plug in fixed values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of "now" for message timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of message ids. Ids must be unique within a process run.
pub trait IdGenerator {
    fn next_id(&mut self, now: DateTime<Utc>) -> String;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Ids derived from the acceptance time in milliseconds since the epoch.
///
/// Two messages accepted within the same millisecond (or after the clock
/// stepped backwards) get the previous id plus one, so ids stay strictly
/// increasing.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: Option<i64>,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        id.to_string()
    }
}

/// Random v4 UUID ids, independent of the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _now: DateTime<Utc>) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Ids `prefix-1`, `prefix-2`, ... in call order.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, _now: DateTime<Utc>) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        (**self).next_id(now)
    }
}
