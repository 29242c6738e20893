//! In-memory profile store.
//!
//! Profiles live for the lifetime of the process; nothing is persisted and
//! nothing is ever removed.

use crate::{Entry, Error, Profile, ProfileStats, Result};
use std::collections::HashMap;

/// Which branch `get_or_create` took
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileStatus {
    Created,
    Returning,
}

/// Username to profile mapping
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the user's profile, creating an empty one on first mention
    pub fn get_or_create(&mut self, username: &str) -> (&mut Profile, ProfileStatus) {
        let status = if self.profiles.contains_key(username) {
            ProfileStatus::Returning
        } else {
            tracing::debug!("Creating profile for '{}'", username);
            ProfileStatus::Created
        };
        let profile = self.profiles.entry(username.to_string()).or_default();
        (profile, status)
    }

    pub fn profile(&self, username: &str) -> Option<&Profile> {
        self.profiles.get(username)
    }

    fn profile_mut(&mut self, username: &str) -> Result<&mut Profile> {
        self.profiles
            .get_mut(username)
            .ok_or_else(|| Error::UnknownProfile(username.to_string()))
    }

    /// Overwrite all three stats fields
    pub fn update_stats(&mut self, username: &str, stats: ProfileStats) -> Result<()> {
        self.profile_mut(username)?.stats = stats;
        Ok(())
    }

    pub fn append_entry(&mut self, username: &str, entry: Entry) -> Result<()> {
        self.profile_mut(username)?.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
