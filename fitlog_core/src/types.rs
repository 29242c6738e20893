//! Core domain types for the tracker.
//!
//! This module defines the records held for a session:
//! - Entry kinds and logged entries
//! - Profile stats
//! - Profiles (stats plus entry history)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Entry Types
// ============================================================================

/// Kind of logged activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Workout,
    Meal,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Workout => "Workout",
            EntryKind::Meal => "Meal",
        }
    }

    /// Parse user-typed text, normalizing case first ("meal", "MEAL" -> Meal)
    pub fn from_input(input: &str) -> Option<Self> {
        capitalize(input).parse().ok()
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Workout" => Ok(EntryKind::Workout),
            "Meal" => Ok(EntryKind::Meal),
            other => Err(format!("unknown entry type '{}'", other)),
        }
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One logged workout or meal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub duration_quantity: String,
    pub calories: i64,
    pub date: String,
}

impl Entry {
    /// JSON object form used when echoing and listing entries
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Free-text profile stats; unset until the first edit
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileStats {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub fitness_goal: Option<String>,
}

/// A user's stats and entry history, in insertion order
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub stats: ProfileStats,
    pub entries: Vec<Entry>,
}
