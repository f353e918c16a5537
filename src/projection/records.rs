//! Projection inputs and per-year output records

use serde::{Deserialize, Deserializer, Serialize};

/// Numeric inputs to a projection, already parsed from text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Starting amount in dollars
    pub initial_amount: f64,

    /// Annual rate in percentage points (5.0 = 5%)
    pub annual_rate_pct: f64,
}

impl ProjectionInput {
    pub fn new(initial_amount: f64, annual_rate_pct: f64) -> Self {
        Self {
            initial_amount,
            annual_rate_pct,
        }
    }

    /// Both fields are finite numbers
    pub fn is_valid(&self) -> bool {
        self.initial_amount.is_finite() && self.annual_rate_pct.is_finite()
    }

    /// Rate as a decimal growth factor per year (5% => 0.05)
    pub fn rate_decimal(&self) -> f64 {
        self.annual_rate_pct / 100.0
    }
}

/// One year of the compounding schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    /// 1-based year
    pub year: u32,

    /// Amount after compounding `year` times
    pub value: f64,

    /// `value - initial_amount`
    pub gain: f64,

    /// `gain / initial_amount * 100`; non-finite when the initial amount is zero
    #[serde(rename = "returnRate", deserialize_with = "nan_if_null")]
    pub return_rate_pct: f64,
}

/// serde_json writes non-finite floats as `null`; read them back as `NaN`
fn nan_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Full projection for one input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input that produced the records; `None` when the input was rejected
    pub input: Option<ProjectionInput>,

    /// Yearly records, empty when the input was rejected
    pub records: Vec<YearlyRecord>,

    /// Rate as the user typed it, echoed in the table's rate column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_text: Option<String>,
}

impl ProjectionResult {
    /// The defined "no input" state
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Record for the last year of the horizon
    pub fn final_record(&self) -> Option<&YearlyRecord> {
        self.records.last()
    }

    /// Gain at the end of the horizon (0 for an empty projection)
    pub fn total_gain(&self) -> f64 {
        self.final_record().map(|r| r.gain).unwrap_or(0.0)
    }
}
