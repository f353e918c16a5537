//! Side-by-side projections of one amount at several rates

use rayon::prelude::*;

use super::engine::ProjectionEngine;
use super::records::{ProjectionInput, ProjectionResult};

/// Project `initial_amount` once per rate, in parallel.
///
/// Results come back in the same order as `rates`; each one is exactly what a
/// single projection at that rate would produce.
pub fn project_rate_sweep(initial_amount: f64, rates: &[f64]) -> Vec<ProjectionResult> {
    let engine = ProjectionEngine::new();
    rates
        .par_iter()
        .map(|&rate| engine.project_input(&ProjectionInput::new(initial_amount, rate)))
        .collect()
}
