// Engine settings, loaded from a JSON file. Every field has a default.
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shared::models::{RegionFilter, Selection};

use crate::data::rates::DEFAULT_CURRENCY;
use crate::error::{EngineError, Result};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub csv_path: PathBuf,
    pub rates_path: Option<PathBuf>,
    pub fetch_timeout_ms: u64,
    pub currency: String,
    /// Unset or "all" means no region filter.
    pub region: Option<String>,
    /// Column summed by the single-column total.
    pub sales_column: String,
    pub export_path: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            csv_path: PathBuf::from("data.csv"),
            rates_path: None,
            fetch_timeout_ms: 10_000,
            currency: DEFAULT_CURRENCY.to_string(),
            region: None,
            sales_column: "sales".to_string(),
            export_path: None,
        }
    }
}

impl EngineSettings {
    /// Reads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(text)
            .map_err(|e| EngineError::ConfigError(format!("invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.fetch_timeout_ms == 0 {
            return Err(EngineError::ConfigError("fetch_timeout_ms must be greater than 0".to_string()));
        }
        if self.sales_column.trim().is_empty() {
            return Err(EngineError::ConfigError("sales_column must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn selection(&self) -> Selection {
        Selection::new(RegionFilter::from_selection(self.region.as_deref()), self.currency.clone())
    }
}
