//! Table, chart and file renderings of a projection

mod chart;
mod table;
mod writers;

pub use chart::{ChartPoint, ChartSeries, ChartTick};
pub use table::{ProjectionTable, TableRow, TABLE_HEADERS};
pub use writers::{to_json, write_csv, write_sweep_csv, write_text, OutputFormat};
