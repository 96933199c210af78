use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown id scheme: {0} (expected `timestamp` or `uuid`)")]
    UnknownIdScheme(String),

    #[error("Thread label must not be blank")]
    BlankThread,
}
