//! Interactive collection of a single entry.

use crate::{CategorySet, Console, Entry, EntryKind, Result};

/// Why an interactively typed entry was rejected
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntry {
    #[error("Invalid entry type!")]
    Kind(String),

    #[error("Invalid input for calories.")]
    Calories(String),
}

/// Outcome of one collection round
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Collected {
    Entry(Entry),
    Invalid(InvalidEntry),
}

/// Prompt for the five entry fields
///
/// An unrecognized kind stops immediately. A new category label is
/// registered before the remaining fields are read, so it stays registered
/// even when the calories turn out to be invalid.
pub fn collect_entry<C: Console>(console: &mut C, categories: &mut CategorySet) -> Result<Collected> {
    let raw_kind = console.ask("Enter the type of entry (Workout/Meal): ")?;
    let Some(kind) = EntryKind::from_input(&raw_kind) else {
        return Ok(Collected::Invalid(InvalidEntry::Kind(raw_kind)));
    };

    let category_prompt = match kind {
        EntryKind::Workout => format!(
            "Choose a workout category from {} or enter a new one: ",
            categories.describe(kind)
        ),
        EntryKind::Meal => format!(
            "Choose a meal category from {} or enter a new one: ",
            categories.describe(kind)
        ),
    };
    let category = console.ask(&category_prompt)?;
    categories.register_category(kind, &category);

    let duration_quantity = match kind {
        EntryKind::Workout => console.ask("Enter the duration of the workout (e.g., 30 minutes): ")?,
        EntryKind::Meal => console.ask("Enter the quantity of the meal (e.g., 1 plate): ")?,
    };

    let raw_calories = console.ask("Enter the calories (number only): ")?;
    let calories = match raw_calories.trim().parse::<i64>() {
        Ok(calories) => calories,
        Err(_) => return Ok(Collected::Invalid(InvalidEntry::Calories(raw_calories))),
    };

    let date = console.ask("Enter the date (YYYY-MM-DD): ")?;

    Ok(Collected::Entry(Entry {
        kind,
        category,
        duration_quantity,
        calories,
        date,
    }))
}
