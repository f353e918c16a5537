//! Projection engine for compound growth schedules

mod engine;
mod records;
mod sweep;

pub use engine::{project, ProjectionEngine};
pub use records::{ProjectionInput, ProjectionResult, YearlyRecord};
pub use sweep::project_rate_sweep;

// ============================================================================
// Projection Constants
// ============================================================================
// The horizon is fixed; every non-empty projection has exactly this many
// yearly records, compounded once per year.

/// Number of yearly records in every projection
pub const PROJECTION_YEARS: u32 = 50;

/// Annual rate used when none is supplied (5%)
pub const DEFAULT_ANNUAL_RATE_PCT: f64 = 5.0;
