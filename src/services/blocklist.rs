//! In-memory registry for the two tier extension blocklist.
//!
//! Every operation takes the one `RwLock` guarding the registry, so batch
//! registrations observe and mutate the state atomically and the custom
//! extension cap cannot be overshot by concurrent writers.

use crate::models::{
    BlocklistSnapshot, CustomExtension, FIXED_EXTENSIONS, FixedExtension, RejectReason,
    RejectedToken,
};
use crate::utils::validation::{is_valid_extension_token, tokenize_extension_input};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BlocklistError {
    #[error("Unknown fixed extension: {0}")]
    UnknownFixed(String),

    #[error("Custom extension not found: {0}")]
    CustomNotFound(Uuid),

    #[error("Custom extension limit reached ({0} max)")]
    CapacityExhausted(usize),

    #[error("Invalid extension: {0}")]
    InvalidToken(String),
}

/// What a batch registration did: which tokens became entries and which
/// were turned away. `total` is the registry size right after the batch,
/// read under the same lock.
#[derive(Debug, Default)]
pub struct AddOutcome {
    pub added: Vec<CustomExtension>,
    pub rejected: Vec<RejectedToken>,
    pub total: usize,
}

#[derive(Debug)]
struct RegistryState {
    fixed: Vec<FixedExtension>,
    custom: Vec<CustomExtension>,
}

pub struct BlocklistService {
    state: RwLock<RegistryState>,
    custom_limit: usize,
}

impl BlocklistService {
    pub fn new(custom_limit: usize) -> Self {
        let fixed = FIXED_EXTENSIONS
            .iter()
            .map(|name| FixedExtension {
                name: name.to_string(),
                blocked: false,
            })
            .collect();

        Self {
            state: RwLock::new(RegistryState {
                fixed,
                custom: Vec::new(),
            }),
            custom_limit,
        }
    }

    pub fn custom_limit(&self) -> usize {
        self.custom_limit
    }

    /// Number of registered custom extensions.
    pub fn custom_count(&self) -> usize {
        self.read_state().custom.len()
    }

    /// All seven fixed extensions in their canonical order.
    pub fn list_fixed(&self) -> Vec<FixedExtension> {
        self.read_state().fixed.clone()
    }

    /// Sets the blocked flag of one fixed extension. Lookup is case
    /// insensitive; writing a flag that already holds still succeeds.
    pub fn set_fixed_blocked(
        &self,
        name: &str,
        blocked: bool,
    ) -> Result<FixedExtension, BlocklistError> {
        let normalized = name.trim().to_lowercase();
        if !is_valid_extension_token(&normalized) {
            return Err(BlocklistError::InvalidToken(normalized));
        }

        let mut state = self.write_state();
        let entry = state
            .fixed
            .iter_mut()
            .find(|f| f.name == normalized)
            .ok_or(BlocklistError::UnknownFixed(normalized))?;

        entry.blocked = blocked;
        info!("Fixed extension '{}' set to blocked={}", entry.name, blocked);
        Ok(entry.clone())
    }

    /// Writes the same blocked state onto every fixed extension. Returns
    /// the number of entries written.
    pub fn bulk_set_fixed(&self, blocked: bool) -> usize {
        let mut state = self.write_state();
        for entry in state.fixed.iter_mut() {
            entry.blocked = blocked;
        }
        info!(
            "All {} fixed extensions set to blocked={}",
            state.fixed.len(),
            blocked
        );
        state.fixed.len()
    }

    /// Custom extensions ordered by registration time, oldest first.
    pub fn list_custom(&self) -> Vec<CustomExtension> {
        let mut entries = self.read_state().custom.clone();
        entries.sort_by_key(|entry| entry.created_at);
        entries
    }

    /// Registers a comma separated batch of extensions in one atomic step.
    ///
    /// Tokens are trimmed, lowercased, and checked against the grammar,
    /// the existing registry and earlier tokens of the same request.
    /// Tokens that fail any of those checks, or land beyond the capacity
    /// limit, are reported back instead of being dropped silently.
    /// `CapacityExhausted` is only returned when the registry is already
    /// full and at least one token could otherwise have been added.
    pub fn add_custom(&self, raw_input: &str) -> Result<AddOutcome, BlocklistError> {
        let mut state = self.write_state();

        let mut outcome = AddOutcome::default();
        let mut accepted: Vec<String> = Vec::new();

        for token in tokenize_extension_input(raw_input) {
            if !is_valid_extension_token(&token) {
                outcome.rejected.push(RejectedToken {
                    token,
                    reason: RejectReason::Invalid,
                });
            } else if accepted.contains(&token)
                || state.custom.iter().any(|entry| entry.extension == token)
            {
                outcome.rejected.push(RejectedToken {
                    token,
                    reason: RejectReason::Duplicate,
                });
            } else {
                accepted.push(token);
            }
        }

        let room = self.custom_limit.saturating_sub(state.custom.len());
        if room == 0 && !accepted.is_empty() {
            return Err(BlocklistError::CapacityExhausted(self.custom_limit));
        }

        for (position, token) in accepted.into_iter().enumerate() {
            if position < room {
                let entry = CustomExtension::new(token);
                state.custom.push(entry.clone());
                outcome.added.push(entry);
            } else {
                outcome.rejected.push(RejectedToken {
                    token,
                    reason: RejectReason::Capacity,
                });
            }
        }

        outcome.total = state.custom.len();
        if !outcome.added.is_empty() {
            info!(
                "Registered {} custom extension(s), {} total",
                outcome.added.len(),
                outcome.total
            );
        }
        Ok(outcome)
    }

    /// Removes one custom extension by id. Deleting the same id twice
    /// fails the second time, so stale delete requests surface instead of
    /// passing silently.
    pub fn delete_custom(&self, id: Uuid) -> Result<CustomExtension, BlocklistError> {
        let mut state = self.write_state();
        let index = state
            .custom
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(BlocklistError::CustomNotFound(id))?;

        let removed = state.custom.remove(index);
        info!("Removed custom extension '{}'", removed.extension);
        Ok(removed)
    }

    /// Drops every custom extension. Returns how many were removed.
    pub fn clear_custom(&self) -> usize {
        let mut state = self.write_state();
        let removed = state.custom.len();
        state.custom.clear();
        info!("Cleared {} custom extension(s)", removed);
        removed
    }

    /// Returns the registry to its initial state: custom extensions gone,
    /// every fixed extension unblocked. Happens under one writer pass, so
    /// readers never observe a half reset registry.
    pub fn reset(&self) {
        let mut state = self.write_state();
        state.custom.clear();
        for entry in state.fixed.iter_mut() {
            entry.blocked = false;
        }
        info!("Blocklist reset to initial state");
    }

    /// Bulk-creates numbered extensions (`{prefix}1`, `{prefix}2`, ...)
    /// for exercising a well filled registry. Names that already exist
    /// are skipped and generation stops at the capacity limit. Fails when
    /// the registry is already full, or when the prefix plus the widest
    /// counter could not form a valid token.
    pub fn seed_test_data(&self, prefix: &str, count: usize) -> Result<usize, BlocklistError> {
        let normalized = prefix.trim().to_lowercase();
        let widest = format!("{}{}", normalized, count);
        if !is_valid_extension_token(&widest) {
            return Err(BlocklistError::InvalidToken(normalized));
        }

        let mut state = self.write_state();
        let room = self.custom_limit.saturating_sub(state.custom.len());
        if room == 0 {
            return Err(BlocklistError::CapacityExhausted(self.custom_limit));
        }

        let mut created = 0;
        for n in 1..=count {
            if created == room {
                break;
            }
            let extension = format!("{}{}", normalized, n);
            if state.custom.iter().any(|entry| entry.extension == extension) {
                continue;
            }
            state.custom.push(CustomExtension::new(extension));
            created += 1;
        }

        info!(
            "Seeded {} test extension(s) with prefix '{}'",
            created, normalized
        );
        Ok(created)
    }

    /// Captures the union of blocked fixed names and all custom
    /// extensions as one immutable set. Upload screening works entirely
    /// off this snapshot, so one batch always sees one blocklist.
    pub fn snapshot(&self) -> BlocklistSnapshot {
        let state = self.read_state();
        state
            .fixed
            .iter()
            .filter(|f| f.blocked)
            .map(|f| f.name.clone())
            .chain(state.custom.iter().map(|entry| entry.extension.clone()))
            .collect()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().expect("blocklist registry lock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().expect("blocklist registry lock poisoned")
    }
}
