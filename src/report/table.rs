//! Display rows for the projection table

use serde::Serialize;

use crate::format::{format_currency, format_percent, format_rate, year_label, CurrencyStyle};
use crate::projection::{ProjectionResult, YearlyRecord};

/// Column headers, in display order
pub const TABLE_HEADERS: [&str; 5] = ["Year", "Value", "Gain", "Return", "Annual Rate"];

/// One formatted table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub year: String,
    pub value: String,
    pub gain: String,
    #[serde(rename = "return")]
    pub return_rate: String,
    pub annual_rate: String,
}

impl TableRow {
    /// `annual_rate` is the already formatted rate column
    pub fn from_record(record: &YearlyRecord, annual_rate: &str) -> Self {
        Self {
            year: year_label(record.year),
            value: format_currency(record.value, CurrencyStyle::Full),
            gain: format_currency(record.gain, CurrencyStyle::Full),
            return_rate: format_percent(record.return_rate_pct),
            annual_rate: annual_rate.to_string(),
        }
    }

    /// Cells in header order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.year.as_str(),
            self.value.as_str(),
            self.gain.as_str(),
            self.return_rate.as_str(),
            self.annual_rate.as_str(),
        ]
    }
}

/// All rows of a projection, one per record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectionTable {
    pub rows: Vec<TableRow>,
}

impl ProjectionTable {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let Some(input) = result.input else {
            return Self::default();
        };
        // Echo typed text ("5.0%") when there is any, else the parsed rate
        let annual_rate = match &result.rate_text {
            Some(text) => format!("{}%", text),
            None => format_rate(input.annual_rate_pct),
        };
        let rows = result
            .records
            .iter()
            .map(|r| TableRow::from_record(r, &annual_rate))
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest cell per column, headers included
    pub fn column_widths(&self) -> [usize; 5] {
        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionEngine, ProjectionInput};

    #[test]
    fn test_reference_rows() {
        let result = ProjectionEngine::new().project_input(&ProjectionInput::new(100_000.0, 5.0));
        let table = ProjectionTable::from_result(&result);

        assert_eq!(table.rows.len(), 50);
        assert_eq!(
            table.rows[0].cells(),
            ["Year 1", "$105,000.00", "$5,000.00", "5.00%", "5%"]
        );
        assert_eq!(
            table.rows[1].cells(),
            ["Year 2", "$110,250.00", "$10,250.00", "10.25%", "5%"]
        );
        assert_eq!(table.rows[49].value, "$1,146,739.98");
    }

    #[test]
    fn test_exact_tie_values_round_up() {
        let result = ProjectionEngine::new().project_input(&ProjectionInput::new(1.0, 12.5));
        let row = &ProjectionTable::from_result(&result).rows[0];
        assert_eq!(row.value, "$1.13");
        assert_eq!(row.gain, "$0.13");
        assert_eq!(row.return_rate, "12.50%");
    }

    #[test]
    fn test_rate_column_echoes_typed_text() {
        let engine = ProjectionEngine::new();
        let table = ProjectionTable::from_result(&engine.project_text("1000", "5.0"));
        assert!(table.rows.iter().all(|r| r.annual_rate == "5.0%"));

        let table = ProjectionTable::from_result(&engine.project_text("1000", "7.25"));
        assert_eq!(table.rows[0].annual_rate, "7.25%");
    }

    #[test]
    fn test_zero_initial_amount_rows_render() {
        let result = ProjectionEngine::new().project_input(&ProjectionInput::new(0.0, 5.0));
        let table = ProjectionTable::from_result(&result);

        assert_eq!(table.rows.len(), 50);
        assert!(table.rows.iter().all(|r| r.return_rate == "NaN%"));
        assert_eq!(table.rows[0].value, "$0.00");
    }

    #[test]
    fn test_empty_result_has_no_rows() {
        let table = ProjectionTable::from_result(&ProjectionResult::empty());
        assert!(table.is_empty());
        assert_eq!(table.column_widths(), [4, 5, 4, 6, 11]);
    }

    #[test]
    fn test_column_widths() {
        let result = ProjectionEngine::new().project_input(&ProjectionInput::new(100_000.0, 5.0));
        let widths = ProjectionTable::from_result(&result).column_widths();
        // "Year 50", "$1,146,739.98"
        assert_eq!(widths[0], 7);
        assert_eq!(widths[1], 13);
    }
}
