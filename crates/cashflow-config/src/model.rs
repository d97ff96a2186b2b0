use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DATA_FILE_NAME: &str = "cashflow.json";

/// Stores user-configurable presentation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Days ahead that are highlighted as "soon" on the timeline.
    #[serde(default = "Config::default_soon_horizon_days")]
    pub soon_horizon_days: i64,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional entry file. Defaults to `cashflow.json` in the working directory.
    pub default_data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            soon_horizon_days: Self::default_soon_horizon_days(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            title: None,
            default_data_file: None,
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "£".into()
    }

    fn default_soon_horizon_days() -> i64 {
        7
    }

    const fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_file(&self) -> PathBuf {
        self.default_data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }

    /// Non-positive horizons collapse to "only today is highlighted".
    pub fn soon_horizon(&self) -> i64 {
        self.soon_horizon_days.max(0)
    }
}
