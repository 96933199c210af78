//! # collective-shared
//!
//! Types shared by every Collective crate: the sender addressing scheme,
//! the immutable [`Message`](protocol::Message) record, the one-line wire
//! encoding, and the clock/id seams used when a message is accepted.

pub mod clock;
pub mod constants;
pub mod error;
pub mod identity;
pub mod protocol;

pub use error::RejectionReason;
pub use identity::EntitySelection;
pub use protocol::{Message, ProtocolLine};
