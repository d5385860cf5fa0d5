use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use uuid::Uuid;

/// The seven extensions every deployment ships with. Order here is the
/// order they are listed in by the API.
pub const FIXED_EXTENSIONS: [&str; 7] = ["bat", "cmd", "com", "cpl", "exe", "scr", "js"];

/// One of the built-in extensions. These can be toggled but never created
/// or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExtension {
    pub name: String,
    pub blocked: bool,
}

/// A user registered extension. Always blocked while it exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomExtension {
    pub id: Uuid,
    pub extension: String,
    pub created_at: DateTime<Utc>,
}

impl CustomExtension {
    pub fn new(extension: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            extension,
            created_at: Utc::now(),
        }
    }
}

/// Why a token from a registration request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Token does not match the `[a-z0-9]{1,20}` grammar.
    Invalid,
    /// Token already registered, or repeated within the same request.
    Duplicate,
    /// The registry filled up before this token's turn.
    Capacity,
}

/// A token that did not become a custom extension, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RejectedToken {
    pub token: String,
    pub reason: RejectReason,
}

/// Immutable union of blocked fixed names and all custom extensions,
/// captured once per upload batch so every file in the batch is judged
/// against the same blocklist.
#[derive(Debug, Clone, Default)]
pub struct BlocklistSnapshot {
    blocked: HashSet<String>,
}

impl BlocklistSnapshot {
    pub fn is_blocked(&self, extension: &str) -> bool {
        self.blocked.contains(extension)
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl FromIterator<String> for BlocklistSnapshot {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            blocked: iter.into_iter().collect(),
        }
    }
}
