//! Project an initial amount forward 50 years at a flat annual rate
//!
//! Writes the yearly table as text, CSV or JSON, optionally with the chart's
//! y-axis ticks, or a side-by-side CSV when several rates are swept.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use growth_projection::{
    input::INITIAL_AMOUNT_FIELD,
    projection::project_rate_sweep,
    report::{to_json, write_csv, write_sweep_csv, write_text},
    CalculatorConfig, ChartSeries, OutputFormat, ProjectionEngine, ProjectionResult,
};

#[derive(Parser, Debug)]
#[command(name = "project", about = "Compound growth projection calculator")]
struct Args {
    /// Initial amount in dollars
    #[arg(short, long)]
    amount: Option<String>,

    /// Annual rate in percent
    #[arg(short, long)]
    rate: Option<String>,

    /// Comma-separated rates to project side by side (CSV output)
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append the chart's y-axis ticks (table format only)
    #[arg(long)]
    chart: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut config = match &args.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };
    if let Some(amount) = args.amount {
        config.initial_amount = Some(amount);
    }
    if let Some(rate) = args.rate {
        config.annual_rate_pct = rate;
    }
    if !args.sweep.is_empty() {
        config.sweep_rates = args.sweep;
    }
    if let Some(format) = args.format {
        config.output = format;
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let amount_text = config.initial_amount.as_deref().unwrap_or("");

    if !config.sweep_rates.is_empty() {
        let amount = INITIAL_AMOUNT_FIELD
            .parse(amount_text)
            .context("a rate sweep needs a valid initial amount")?;
        let results = project_rate_sweep(amount, &config.sweep_rates);
        write_sweep_csv(&mut out, &results)?;
    } else {
        let result = ProjectionEngine::new().project_text(amount_text, &config.annual_rate_pct);
        render(&mut out, &result, &config, args.chart)?;
    }

    out.flush()?;
    info!("projection written in {:?}", start.elapsed());
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    result: &ProjectionResult,
    config: &CalculatorConfig,
    chart: bool,
) -> Result<()> {
    match config.output {
        OutputFormat::Table => {
            write_text(&mut *out, result)?;
            if chart && !result.is_empty() {
                let series = ChartSeries::from_result(result);
                writeln!(out)?;
                writeln!(out, "Chart: {} points", series.points.len())?;
                for tick in series.y_ticks(config.chart_ticks).iter().rev() {
                    writeln!(out, "  {:>8}", tick.label)?;
                }
            }
        }
        OutputFormat::Csv => write_csv(&mut *out, result)?,
        OutputFormat::Json => writeln!(out, "{}", to_json(result)?)?,
    }
    Ok(())
}
