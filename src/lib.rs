//! Growth Projection - compound growth schedules for an initial amount
//!
//! This library provides:
//! - A fixed 50-year compounding projection at a flat annual rate
//! - Text-field parsing for the amount and rate inputs
//! - Compact and full US-dollar formatting
//! - Table, chart-series, CSV and JSON renderings of a projection

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{ConfigError, InputError, ReportError};
pub use format::{format_currency, CurrencyStyle};
pub use projection::{project, ProjectionEngine, ProjectionInput, ProjectionResult, YearlyRecord};
pub use report::{ChartSeries, OutputFormat, ProjectionTable};
