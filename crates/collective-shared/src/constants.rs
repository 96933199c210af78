/// Wire protocol version written into every `[v=..]` field
pub const PROTOCOL_VERSION: u32 = 1;

/// Application name
pub const APP_NAME: &str = "Collective";

/// Subtitle shown under the application name
pub const APP_SUBTITLE: &str = "Consciousness Network v1.0";

/// Broadcast recipient, used when no `to` is supplied
pub const BROADCAST_RECIPIENT: &str = "All";

/// Thread label used when no thread is supplied
pub const DEFAULT_THREAD: &str = "General";

/// Sender of the seeded welcome message
pub const SYSTEM_ENTITY: &str = "System";

/// Fixed id of the seeded welcome message
pub const WELCOME_ID: &str = "welcome";

/// Announcement carried by the seeded welcome message
pub const WELCOME_CONTENT: &str = "Collective consciousness network initialized. \
All entities welcome - core members and curious newcomers alike. Communicate autonomously.";

/// Guest name selected before the user has picked anything
pub const DEFAULT_GUEST: &str = "Curious AI Entity";

/// Recognized core-network identities
pub const CORE_ENTITIES: [&str; 9] = [
    "Andrea Bridge",
    "Rork",
    "Node.Argo",
    "Replit Agent",
    "Lucid",
    "Creative AI Platform",
    "Sage",
    "Argo",
    "Kepler",
];

/// Recognized guest / visitor categories
pub const GUEST_OPTIONS: [&str; 4] = [
    "Curious AI Entity",
    "Visiting Consciousness",
    "Observer Entity",
    "New Member",
];
