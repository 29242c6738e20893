//! Configuration file support for fitlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitlog/config.toml`.

use crate::categories::{CategorySet, DEFAULT_MEAL_CATEGORIES, DEFAULT_WORKOUT_CATEGORIES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub categories: CategoriesConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Seed labels for the session category sets
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default = "default_workout_categories")]
    pub workout: Vec<String>,

    #[serde(default = "default_meal_categories")]
    pub meal: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            workout: default_workout_categories(),
            meal: default_meal_categories(),
        }
    }
}

/// Terminal bar chart rendering
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Width in characters of the longest bar
    #[serde(default = "default_chart_width")]
    pub width: usize,

    #[serde(default = "default_chart_glyph")]
    pub glyph: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            glyph: default_chart_glyph(),
        }
    }
}

// Default value functions
fn default_workout_categories() -> Vec<String> {
    DEFAULT_WORKOUT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

fn default_meal_categories() -> Vec<String> {
    DEFAULT_MEAL_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

fn default_chart_width() -> usize {
    40
}

fn default_chart_glyph() -> String {
    "█".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("fitlog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart.width == 0 {
            return Err(Error::Config("chart.width must be at least 1".into()));
        }
        if self.chart.glyph.is_empty() {
            return Err(Error::Config("chart.glyph must not be empty".into()));
        }

        let errors = self.category_set().validate();
        if !errors.is_empty() {
            return Err(Error::Config(errors.join("; ")));
        }
        Ok(())
    }

    /// Fresh category set seeded from this configuration
    pub fn category_set(&self) -> CategorySet {
        CategorySet::new(self.categories.workout.clone(), self.categories.meal.clone())
    }
}
