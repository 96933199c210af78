//! # collective-store
//!
//! The in-memory, append-only message log.
//!
//! The [`MessageLog`] owns every accepted [`Message`](collective_shared::Message).
//! It validates drafts, stamps ids and timestamps from injectable sources,
//! and hands back the protocol line for each accepted message. Nothing is
//! ever edited, removed or reordered.

pub mod log;

mod error;

pub use error::{Result, StoreError};
pub use log::{Accepted, MessageLog};
