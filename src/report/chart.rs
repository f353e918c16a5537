//! Line-chart series: year on the x axis, value on the y axis

use serde::Serialize;

use crate::format::{format_currency, year_label, CurrencyStyle};
use crate::projection::ProjectionResult;

/// One plotted point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: u32,
    pub value: f64,
    /// `Year N`
    pub x_label: String,
    /// Full-currency value shown on hover
    pub tooltip: String,
}

/// A y-axis tick with its compact currency label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let points = result
            .records
            .iter()
            .map(|r| ChartPoint {
                year: r.year,
                value: r.value,
                x_label: year_label(r.year),
                tooltip: format_currency(r.value, CurrencyStyle::Full),
            })
            .collect();
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Y-axis extent, always including zero; non-finite values are skipped
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (lo, hi) = self
            .points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((lo, hi))
    }

    /// `count` evenly spaced ticks across the y domain (at least two)
    pub fn y_ticks(&self, count: usize) -> Vec<ChartTick> {
        let Some((lo, hi)) = self.y_domain() else {
            return Vec::new();
        };
        if hi == lo {
            return vec![tick(lo)];
        }

        let count = count.max(2);
        let step = (hi - lo) / (count - 1) as f64;
        (0..count).map(|i| tick(lo + step * i as f64)).collect()
    }
}

fn tick(value: f64) -> ChartTick {
    ChartTick {
        value,
        label: format_currency(value, CurrencyStyle::Compact),
    }
}
