use thiserror::Error;

/// Why the log refused an append.
///
/// Neither variant is fatal: the log is left untouched and no protocol line
/// is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Message content is empty")]
    EmptyContent,

    #[error("Sender entity is empty")]
    EmptyEntity,
}
