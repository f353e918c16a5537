//! Calculator settings loaded from a JSON file
//!
//! Every field has a default, so `{}` is a valid config. Command-line flags
//! override whatever is loaded here.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::projection::DEFAULT_ANNUAL_RATE_PCT;
use crate::report::OutputFormat;

/// Settings for one calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Starting amount as entered text; `None` leaves the field blank
    #[serde(default)]
    pub initial_amount: Option<String>,

    /// Annual rate as entered text (default: "5")
    #[serde(default = "default_rate")]
    pub annual_rate_pct: String,

    /// Extra rates for a side-by-side sweep
    #[serde(default)]
    pub sweep_rates: Vec<f64>,

    #[serde(default)]
    pub output: OutputFormat,

    /// Number of y-axis ticks in the chart summary
    #[serde(default = "default_chart_ticks")]
    pub chart_ticks: usize,
}

fn default_rate() -> String { DEFAULT_ANNUAL_RATE_PCT.to_string() }
fn default_chart_ticks() -> usize { 5 }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial_amount: None,
            annual_rate_pct: default_rate(),
            sweep_rates: Vec::new(),
            output: OutputFormat::default(),
            chart_ticks: default_chart_ticks(),
        }
    }
}

impl CalculatorConfig {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Load settings from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config = Self::from_json(&json, &display)?;
        info!("loaded calculator config from {}", display);
        Ok(config)
    }
}
