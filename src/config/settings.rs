//! User settings for budget-setup
//!
//! Manages preferences: the reconcile mode, currency symbol, the category
//! presets offered by the selector and flash message timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::SetupPaths;
use crate::error::BudgetError;
use crate::models::ReconcileMode;

/// Timing of transient flash messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashSettings {
    /// How long a message stays fully visible
    pub display_ms: u64,
    /// How long the fade-out lasts afterwards
    pub fade_ms: u64,
}

impl FlashSettings {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            fade_ms: 500,
        }
    }
}

/// User settings for budget-setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether allocations are capped by the total budget
    #[serde(default)]
    pub mode: ReconcileMode,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Preset categories offered by the selector
    #[serde(default = "default_category_options")]
    pub category_options: Vec<String>,

    /// Flash message timing
    #[serde(default)]
    pub flash: FlashSettings,

    /// Path the month selector navigates to
    #[serde(default = "default_submit_path")]
    pub submit_path: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_category_options() -> Vec<String> {
    [
        "Food",
        "Rent",
        "Transportation",
        "Utilities",
        "Entertainment",
        "Shopping",
        "Health",
        "Savings",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_submit_path() -> String {
    "/budget-setup".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            mode: ReconcileMode::default(),
            currency_symbol: default_currency(),
            category_options: default_category_options(),
            flash: FlashSettings::default(),
            submit_path: default_submit_path(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SetupPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SetupPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
