use thiserror::Error;

/// Errors produced by the store layer.
///
/// Append rejections are not errors of the store; they are reported as
/// [`RejectionReason`](collective_shared::RejectionReason) values.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transcript export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
