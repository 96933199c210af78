//! Client configuration loaded from environment variables.
//!
//! All settings have defaults matching a fresh session: the guest
//! placeholder selected, the `General` thread, time-derived ids.

use std::str::FromStr;

use collective_shared::clock::{IdGenerator, TimestampIds, UuidIds};
use collective_shared::constants::{DEFAULT_GUEST, DEFAULT_THREAD};

use crate::error::ConfigError;

/// How message ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdScheme {
    /// Epoch milliseconds, bumped to stay unique.
    #[default]
    Timestamp,
    /// Random v4 UUIDs.
    Uuid,
}

impl IdScheme {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Timestamp => Box::new(TimestampIds::default()),
            Self::Uuid => Box::new(UuidIds),
        }
    }
}

impl FromStr for IdScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" | "time" => Ok(Self::Timestamp),
            "uuid" => Ok(Self::Uuid),
            _ => Err(ConfigError::UnknownIdScheme(s.to_string())),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Name selected when the session starts.
    /// Env: `COLLECTIVE_DEFAULT_ENTITY`
    /// Default: `"Curious AI Entity"`
    pub default_entity: String,

    /// Thread label used until the user switches.
    /// Env: `COLLECTIVE_THREAD`
    /// Default: `"General"`
    pub thread: String,

    /// Id generation scheme.
    /// Env: `COLLECTIVE_ID_SCHEME` (`timestamp` / `uuid`)
    /// Default: `timestamp`
    pub id_scheme: IdScheme,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_entity: DEFAULT_GUEST.to_string(),
            thread: DEFAULT_THREAD.to_string(),
            id_scheme: IdScheme::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("COLLECTIVE_DEFAULT_ENTITY") {
            let name = name.trim();
            if name.is_empty() {
                tracing::warn!("Blank COLLECTIVE_DEFAULT_ENTITY, using default");
            } else {
                config.default_entity = name.to_string();
            }
        }

        if let Some(thread) = lookup("COLLECTIVE_THREAD") {
            match parse_thread(&thread) {
                Ok(label) => config.thread = label,
                Err(e) => tracing::warn!(error = %e, "Invalid COLLECTIVE_THREAD, using default"),
            }
        }

        if let Some(scheme) = lookup("COLLECTIVE_ID_SCHEME") {
            match scheme.parse::<IdScheme>() {
                Ok(parsed) => config.id_scheme = parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid COLLECTIVE_ID_SCHEME, using default")
                }
            }
        }

        config
    }
}

/// Trim a thread label, refusing blank ones.
pub fn parse_thread(raw: &str) -> Result<String, ConfigError> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(ConfigError::BlankThread);
    }
    Ok(label.to_string())
}
