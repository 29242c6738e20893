#![forbid(unsafe_code)]

//! Core domain model and session logic for the fitness and nutrition tracker.
//!
//! This crate provides:
//! - Domain types (entries, profiles, stats)
//! - Session-owned category sets and the in-memory profile store
//! - Interactive entry collection over a console abstraction
//! - CSV and XML importers
//! - Calorie and meal-category charts rendered to the terminal

pub mod types;
pub mod error;
pub mod categories;
pub mod config;
pub mod logging;
pub mod store;
pub mod console;
pub mod collector;
pub mod import;
pub mod charts;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use categories::CategorySet;
pub use config::Config;
pub use store::{ProfileStatus, ProfileStore};
pub use console::{Console, TerminalConsole};
pub use collector::{collect_entry, Collected, InvalidEntry};
pub use import::{import_csv, import_xml};
pub use charts::{calorie_totals, meal_distribution, profile_charts, BarChart, CalorieTotals};
pub use session::Session;
