use serde::{Deserialize, Serialize};

use crate::constants::{CORE_ENTITIES, DEFAULT_GUEST, GUEST_OPTIONS};

/// Which sender the user has picked.
///
/// Identities are unauthenticated labels. A roster or guest entry names one
/// of the fixed identities, a custom entry carries whatever the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum EntitySelection {
    /// A recognized core-network identity.
    Roster(String),
    /// A recognized guest / visitor category.
    Guest(String),
    /// Free text; only meaningful once trimmed to something non-empty.
    Custom(String),
}

impl EntitySelection {
    /// Map a name onto the roster it belongs to, or `Custom` if neither
    /// roster recognizes it.
    pub fn classify(name: &str) -> Self {
        if is_core_entity(name) {
            Self::Roster(name.to_string())
        } else if is_guest_option(name) {
            Self::Guest(name.to_string())
        } else {
            Self::Custom(name.to_string())
        }
    }

    /// The name carried by the selection, untrimmed.
    pub fn name(&self) -> &str {
        match self {
            Self::Roster(name) | Self::Guest(name) | Self::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl Default for EntitySelection {
    fn default() -> Self {
        Self::Guest(DEFAULT_GUEST.to_string())
    }
}

/// Resolve the sender name for an outgoing message.
///
/// A custom name that is non-empty once trimmed always wins; otherwise the
/// selection's own name is used. A `Custom` selection whose text is blank
/// falls back to [`DEFAULT_GUEST`] so there is always a sender.
pub fn resolve(selection: &EntitySelection, custom_raw: &str) -> String {
    let trimmed = custom_raw.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match selection {
        EntitySelection::Roster(name) | EntitySelection::Guest(name) => name.clone(),
        EntitySelection::Custom(raw) => match raw.trim() {
            "" => DEFAULT_GUEST.to_string(),
            name => name.to_string(),
        },
    }
}

pub fn is_core_entity(name: &str) -> bool {
    CORE_ENTITIES.contains(&name)
}

pub fn is_guest_option(name: &str) -> bool {
    GUEST_OPTIONS.contains(&name)
}
