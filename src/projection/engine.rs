//! Compounding schedule computation
//!
//! The running value starts at the initial amount and is multiplied by
//! `(1 + rate)` once per year. Nothing is rounded during accumulation;
//! rounding happens only when records are formatted for display.

use log::debug;

use super::records::{ProjectionInput, ProjectionResult, YearlyRecord};
use super::PROJECTION_YEARS;

/// Project an initial amount forward at a flat annual rate.
///
/// Missing or non-finite inputs yield an empty schedule rather than an error.
/// A zero initial amount is accepted; its return rates come out as `NaN`.
pub fn project(initial_amount: Option<f64>, annual_rate_pct: Option<f64>) -> Vec<YearlyRecord> {
    match (initial_amount, annual_rate_pct) {
        (Some(initial), Some(rate)) => ProjectionEngine::new()
            .project_input(&ProjectionInput::new(initial, rate))
            .records,
        _ => Vec::new(),
    }
}

/// Stateless projection engine; every call recomputes from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Project a parsed input over the full horizon
    pub fn project_input(&self, input: &ProjectionInput) -> ProjectionResult {
        if !input.is_valid() {
            debug!("rejecting non-finite projection input {:?}", input);
            return ProjectionResult::empty();
        }

        let initial = input.initial_amount;
        let growth = 1.0 + input.rate_decimal();
        let mut current_value = initial;

        let records = (1..=PROJECTION_YEARS)
            .map(|year| {
                current_value *= growth;
                let gain = current_value - initial;
                YearlyRecord {
                    year,
                    value: current_value,
                    gain,
                    return_rate_pct: gain / initial * 100.0,
                }
            })
            .collect();

        debug!(
            "projected {} at {}% over {} years",
            initial, input.annual_rate_pct, PROJECTION_YEARS
        );

        ProjectionResult {
            input: Some(*input),
            records,
            rate_text: None,
        }
    }

    /// Parse both text fields and project; unparsable text gives an empty result
    pub fn project_text(&self, amount_text: &str, rate_text: &str) -> ProjectionResult {
        match ProjectionInput::from_text(amount_text, rate_text) {
            Ok(input) => ProjectionResult {
                rate_text: Some(rate_text.trim().to_string()),
                ..self.project_input(&input)
            },
            Err(e) => {
                debug!("no projection: {}", e);
                ProjectionResult::empty()
            }
        }
    }
}
