//! CSV, JSON and plain-text output

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::table::{ProjectionTable, TABLE_HEADERS};
use crate::error::ReportError;
use crate::format::{format_currency, format_rate, year_label, CurrencyStyle};
use crate::projection::{ProjectionResult, PROJECTION_YEARS};

/// Output rendering selected on the command line or in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Formatted table rows as CSV
    Csv,
    /// Raw yearly records as JSON
    Json,
}

/// Shown instead of a table when there is nothing to project
const EMPTY_MESSAGE: &str = "No projection: enter an initial amount and an annual rate.";

/// Write the formatted table as CSV; an empty projection writes only the header
pub fn write_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<(), ReportError> {
    let table = ProjectionTable::from_result(result);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TABLE_HEADERS)?;
    for row in &table.rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one column of full-currency values per swept rate
pub fn write_sweep_csv<W: Write>(
    writer: W,
    results: &[ProjectionResult],
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Year".to_string()];
    header.extend(results.iter().map(|r| match r.input {
        Some(input) => format!("Value @ {}", format_rate(input.annual_rate_pct)),
        None => "Value @ n/a".to_string(),
    }));
    wtr.write_record(&header)?;

    for year in 1..=PROJECTION_YEARS {
        let idx = (year - 1) as usize;
        let mut record = vec![year_label(year)];
        record.extend(results.iter().map(|r| {
            r.records
                .get(idx)
                .map(|rec| format_currency(rec.value, CurrencyStyle::Full))
                .unwrap_or_default()
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Raw records as pretty JSON; `[]` for an empty projection.
///
/// Non-finite return rates serialize as `null`.
pub fn to_json(result: &ProjectionResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&result.records)?)
}

/// Aligned text table, year column left-aligned and amounts right-aligned
pub fn write_text<W: Write>(mut writer: W, result: &ProjectionResult) -> Result<(), ReportError> {
    let table = ProjectionTable::from_result(result);
    if table.is_empty() {
        writeln!(writer, "{}", EMPTY_MESSAGE)?;
        return Ok(());
    }

    let widths = table.column_widths();
    write_text_row(&mut writer, &TABLE_HEADERS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(writer, "{}", rule.join("  "))?;
    for row in &table.rows {
        write_text_row(&mut writer, &row.cells(), &widths)?;
    }
    Ok(())
}

fn write_text_row<W: Write>(
    writer: &mut W,
    cells: &[&str; 5],
    widths: &[usize; 5],
) -> Result<(), ReportError> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        } else {
            line.push_str(&format!("  {:>width$}", cell, width = *width));
        }
    }
    writeln!(writer, "{}", line)?;
    Ok(())
}
