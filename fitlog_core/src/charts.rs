//! Calorie and meal-category summaries rendered as terminal bar charts.

use crate::config::ChartConfig;
use crate::{Entry, EntryKind, Profile};

/// Calorie sums split by entry kind
///
/// Sums saturate at the `i64` bounds instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalorieTotals {
    /// Sum over Workout entries
    pub burned: i64,
    /// Sum over Meal entries
    pub consumed: i64,
}

pub fn calorie_totals(entries: &[Entry]) -> CalorieTotals {
    entries
        .iter()
        .fold(CalorieTotals::default(), |mut totals, entry| {
            match entry.kind {
                EntryKind::Workout => {
                    totals.burned = totals.burned.saturating_add(entry.calories)
                }
                EntryKind::Meal => {
                    totals.consumed = totals.consumed.saturating_add(entry.calories)
                }
            }
            totals
        })
}

/// Meal entry counts per category, in order of first occurrence
pub fn meal_distribution(entries: &[Entry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries.iter().filter(|e| e.kind == EntryKind::Meal) {
        match counts.iter_mut().find(|(category, _)| *category == entry.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.category.clone(), 1)),
        }
    }
    counts
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
}

/// A titled set of labelled bars
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Render as text; bars scale to the largest positive value
    pub fn render(&self, style: &ChartConfig) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.bars.iter().map(|b| b.value).max().unwrap_or(0).max(0);

        let mut out = String::new();
        out.push_str("╭─────────────────────────────────────────╮\n");
        out.push_str(&format!("│  {}\n", self.title));
        out.push_str("╰─────────────────────────────────────────╯\n");

        for bar in &self.bars {
            let len = scaled_len(bar.value, max, style.width);
            out.push_str(&format!(
                "  {:<label_width$} │{:<bar_width$} {}\n",
                bar.label,
                style.glyph.repeat(len),
                bar.value,
                label_width = label_width,
                bar_width = style.width,
            ));
        }

        out.push_str(&format!("  x: {}   y: {}\n", self.x_label, self.y_label));
        out
    }
}

fn scaled_len(value: i64, max: i64, width: usize) -> usize {
    if value <= 0 || max <= 0 {
        return 0;
    }
    let len = (value as i128 * width as i128) / max as i128;
    // Tiny positive values still get one cell
    (len as usize).clamp(1, width)
}

/// Charts for a profile: calories always, meal categories only when meals exist
pub fn profile_charts(username: &str, profile: &Profile) -> Vec<BarChart> {
    let totals = calorie_totals(&profile.entries);
    let mut charts = vec![BarChart {
        title: format!("Calories Burned vs. Consumed for {}", username),
        x_label: "Calories".into(),
        y_label: "Amount".into(),
        bars: vec![
            Bar {
                label: "Calories Burned".into(),
                value: totals.burned,
            },
            Bar {
                label: "Calories Consumed".into(),
                value: totals.consumed,
            },
        ],
    }];

    let distribution = meal_distribution(&profile.entries);
    if distribution.is_empty() {
        tracing::debug!("No meal entries for '{}', skipping category chart", username);
    } else {
        charts.push(BarChart {
            title: format!("Meal Categories Distribution for {}", username),
            x_label: "Meal Categories".into(),
            y_label: "Frequency".into(),
            bars: distribution
                .into_iter()
                .map(|(label, count)| Bar {
                    label,
                    value: count as i64,
                })
                .collect(),
        });
    }

    charts
}
