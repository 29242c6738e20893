//! Known category labels per entry kind.
//!
//! The sets start from built-in (or configured) seeds and grow as users
//! type new labels during a session.

use crate::types::EntryKind;

/// Built-in workout categories
pub const DEFAULT_WORKOUT_CATEGORIES: [&str; 4] = ["Cardio", "Strength", "Yoga", "Pilates"];

/// Built-in meal categories
pub const DEFAULT_MEAL_CATEGORIES: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snack"];

/// Session-owned, append-only category lists
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    workout: Vec<String>,
    meal: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            workout: DEFAULT_WORKOUT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            meal: DEFAULT_MEAL_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategorySet {
    pub fn new(workout: Vec<String>, meal: Vec<String>) -> Self {
        Self { workout, meal }
    }

    /// Current labels for a kind, in registration order
    pub fn categories(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Workout => &self.workout,
            EntryKind::Meal => &self.meal,
        }
    }

    pub fn contains(&self, kind: EntryKind, name: &str) -> bool {
        self.categories(kind).iter().any(|c| c == name)
    }

    /// Add a label to a kind's set if it is not already known
    ///
    /// Returns true when the label was newly added.
    pub fn register_category(&mut self, kind: EntryKind, name: &str) -> bool {
        if self.contains(kind, name) {
            return false;
        }
        let list = match kind {
            EntryKind::Workout => &mut self.workout,
            EntryKind::Meal => &mut self.meal,
        };
        list.push(name.to_string());
        tracing::debug!("Registered new {} category '{}'", kind, name);
        true
    }

    /// Bracketed listing used in category prompts
    pub fn describe(&self, kind: EntryKind) -> String {
        format!("[{}]", self.categories(kind).join(", "))
    }

    /// Validate seeds for emptiness and duplicates
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for kind in [EntryKind::Workout, EntryKind::Meal] {
            let list = self.categories(kind);
            for (i, name) in list.iter().enumerate() {
                if name.trim().is_empty() {
                    errors.push(format!("{} category #{} is empty", kind, i + 1));
                }
                if list[..i].contains(name) {
                    errors.push(format!("{} category '{}' is listed twice", kind, name));
                }
            }
        }

        errors
    }
}
