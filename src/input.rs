//! Text-field input boundary
//!
//! Both fields arrive as user-editable text. Parsing rejects only what is not
//! a finite number; the fields' min/max bounds are advisory and produce a
//! warning rather than a rejection.

use log::warn;

use crate::error::InputError;
use crate::projection::ProjectionInput;

/// Descriptor for a numeric text field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Stable identifier of the field
    pub id: &'static str,

    /// Human-readable label
    pub label: &'static str,

    pub min: Option<f64>,
    pub max: Option<f64>,

    /// Increment used by spinner controls
    pub step: Option<f64>,

    /// Initial text of the field
    pub default: Option<&'static str>,
}

/// Starting amount in dollars; no upper bound
pub const INITIAL_AMOUNT_FIELD: FieldSpec = FieldSpec {
    id: "investment",
    label: "Initial Home Value ($)",
    min: Some(0.0),
    max: None,
    step: None,
    default: None,
};

/// Annual appreciation rate in percent
pub const ANNUAL_RATE_FIELD: FieldSpec = FieldSpec {
    id: "rate",
    label: "Annual Appreciation Rate (%)",
    min: Some(0.0),
    max: Some(100.0),
    step: Some(0.1),
    default: Some("5"),
};

impl FieldSpec {
    /// Parse this field's text as a finite number
    pub fn parse(&self, text: &str) -> Result<f64, InputError> {
        parse_number(self.id, text)
    }

    /// Describe a bound violation, if any
    pub fn check(&self, value: f64) -> Option<String> {
        if let Some(min) = self.min {
            if value < min {
                return Some(format!("{} is below the minimum of {}", self.label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Some(format!("{} is above the maximum of {}", self.label, max));
            }
        }
        None
    }
}

/// Parse trimmed text as a finite `f64`
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        text: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite {
            field,
            text: trimmed.to_string(),
        });
    }

    Ok(value)
}

impl ProjectionInput {
    /// Parse the amount and rate fields into a projection input.
    ///
    /// Out-of-range values are accepted and logged at warn level.
    pub fn from_text(amount_text: &str, rate_text: &str) -> Result<Self, InputError> {
        let initial_amount = INITIAL_AMOUNT_FIELD.parse(amount_text)?;
        let annual_rate_pct = ANNUAL_RATE_FIELD.parse(rate_text)?;

        for warning in [
            INITIAL_AMOUNT_FIELD.check(initial_amount),
            ANNUAL_RATE_FIELD.check(annual_rate_pct),
        ]
        .into_iter()
        .flatten()
        {
            warn!("{}", warning);
        }

        Ok(Self::new(initial_amount, annual_rate_pct))
    }
}
