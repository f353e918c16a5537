//! US-dollar currency, percentage and year-label formatting
//!
//! All rounding in the crate happens here, at display time.

/// Currency display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyStyle {
    /// Magnitude suffixes (K/M/B/T), at most one fractional digit
    Compact,
    /// Thousands grouping, exactly two fractional digits
    #[default]
    Full,
}

/// Magnitude suffixes, smallest first
const COMPACT_UNITS: [(f64, &str); 4] = [
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Format a dollar amount in the given style
pub fn format_currency(value: f64, style: CurrencyStyle) -> String {
    if let Some(s) = non_finite_currency(value) {
        return s;
    }
    match style {
        CurrencyStyle::Compact => format_compact(value),
        CurrencyStyle::Full => format_full(value),
    }
}

/// `$1,234,567.00`
fn format_full(value: f64) -> String {
    let digits = format!("{:.2}", round_to_hundredth(value.abs()));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let negative = value < 0.0 && digits != "0.00";
    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

/// `$1.2M`
fn format_compact(value: f64) -> String {
    let abs = value.abs();

    // Largest unit not exceeding the value; None below 1,000
    let mut unit = COMPACT_UNITS.iter().rposition(|(threshold, _)| abs >= *threshold);
    let mut rounded = round_to_tenth(scale(abs, unit));

    // 999.96 rounds to 1000.0; carry into the next unit when there is one
    if rounded >= 1000.0 {
        let next = unit.map_or(0, |i| i + 1);
        if next < COMPACT_UNITS.len() {
            unit = Some(next);
            rounded = round_to_tenth(scale(abs, unit));
        }
    }

    let suffix = unit.map_or("", |i| COMPACT_UNITS[i].1);
    let negative = value < 0.0 && rounded != 0.0;
    format!(
        "{}${}{}",
        if negative { "-" } else { "" },
        trim_tenth(rounded),
        suffix
    )
}

fn scale(abs: f64, unit: Option<usize>) -> f64 {
    match unit {
        Some(i) => abs / COMPACT_UNITS[i].0,
        None => abs,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Ties round away from zero, unlike `{:.2}` which rounds them to even
fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One decimal place at most, `.0` dropped
fn trim_tenth(value: f64) -> String {
    let digits = format!("{:.1}", value);
    match digits.split_once('.') {
        Some((int_part, "0")) => group_compact(int_part),
        Some((int_part, frac)) => format!("{}.{}", group_compact(int_part), frac),
        None => group_compact(&digits),
    }
}

/// Compact notation only groups integer parts of five or more digits
fn group_compact(int_part: &str) -> String {
    if int_part.len() < 5 {
        int_part.to_string()
    } else {
        group_thousands(int_part)
    }
}

fn non_finite_currency(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("$NaN".to_string())
    } else if value == f64::INFINITY {
        Some("$∞".to_string())
    } else if value == f64::NEG_INFINITY {
        Some("-$∞".to_string())
    } else {
        None
    }
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        let pos_from_end = len - i;
        out.push(ch);
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(',');
        }
    }
    out
}

/// Return percentage with two decimals, e.g. `10.25%`.
///
/// Non-finite values (a zero initial amount) render as `NaN%` or `Infinity%`.
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        "NaN%".to_string()
    } else if value == f64::INFINITY {
        "Infinity%".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity%".to_string()
    } else {
        format!("{:.2}%", round_to_hundredth(value))
    }
}

/// Flat annual rate in its shortest form, e.g. `5%` or `5.5%`
pub fn format_rate(rate_pct: f64) -> String {
    format!("{}%", rate_pct)
}

/// Axis, tooltip and table label for a year
pub fn year_label(year: u32) -> String {
    format!("Year {}", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_currency() {
        assert_eq!(format_currency(1_234_567.0, CurrencyStyle::Full), "$1,234,567.00");
        assert_eq!(format_currency(105_000.0, CurrencyStyle::Full), "$105,000.00");
        assert_eq!(format_currency(999.999, CurrencyStyle::Full), "$1,000.00");
        assert_eq!(format_currency(0.5, CurrencyStyle::Full), "$0.50");
        assert_eq!(format_currency(0.0, CurrencyStyle::Full), "$0.00");
        assert_eq!(format_currency(-1234.5, CurrencyStyle::Full), "-$1,234.50");
        assert_eq!(format_currency(-0.001, CurrencyStyle::Full), "$0.00");
    }

    #[test]
    fn test_full_currency_ties_round_up() {
        assert_eq!(format_currency(1.125, CurrencyStyle::Full), "$1.13");
        assert_eq!(format_currency(0.125, CurrencyStyle::Full), "$0.13");
        assert_eq!(format_currency(-0.125, CurrencyStyle::Full), "-$0.13");
        assert_eq!(format_currency(1_000.375, CurrencyStyle::Full), "$1,000.38");
        // Same direction as the compact path
        assert_eq!(format_currency(1_250.0, CurrencyStyle::Compact), "$1.3K");
    }

    #[test]
    fn test_compact_currency() {
        assert_eq!(format_currency(1_234_567.0, CurrencyStyle::Compact), "$1.2M");
        assert_eq!(format_currency(105_000.0, CurrencyStyle::Compact), "$105K");
        assert_eq!(format_currency(1_500.0, CurrencyStyle::Compact), "$1.5K");
        assert_eq!(format_currency(2_000_000_000.0, CurrencyStyle::Compact), "$2B");
        assert_eq!(format_currency(3.4e12, CurrencyStyle::Compact), "$3.4T");
        assert_eq!(format_currency(12.34, CurrencyStyle::Compact), "$12.3");
        assert_eq!(format_currency(0.0, CurrencyStyle::Compact), "$0");
        assert_eq!(format_currency(-2_500.0, CurrencyStyle::Compact), "-$2.5K");
    }

    #[test]
    fn test_compact_rounding_carries_to_next_unit() {
        assert_eq!(format_currency(999.97, CurrencyStyle::Compact), "$1K");
        assert_eq!(format_currency(999_960.0, CurrencyStyle::Compact), "$1M");
        // No unit above T
        assert_eq!(format_currency(2.5e15, CurrencyStyle::Compact), "$2500T");
        assert_eq!(format_currency(2.5e16, CurrencyStyle::Compact), "$25,000T");
    }

    #[test]
    fn test_compact_has_at_most_one_fraction_digit() {
        for value in [1.0, 17.77, 1_049.0, 54_321.0, 7_654_321.0, 98_765_432_100.0] {
            let s = format_currency(value, CurrencyStyle::Compact);
            if let Some((_, frac)) = s.split_once('.') {
                let digits = frac.chars().take_while(|c| c.is_ascii_digit()).count();
                assert!(digits <= 1, "{} -> {}", value, s);
            }
        }
    }

    #[test]
    fn test_non_finite_currency() {
        assert_eq!(format_currency(f64::NAN, CurrencyStyle::Full), "$NaN");
        assert_eq!(format_currency(f64::INFINITY, CurrencyStyle::Compact), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY, CurrencyStyle::Full), "-$∞");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(5.0), "5.00%");
        assert_eq!(format_percent(10.25), "10.25%");
        assert_eq!(format_percent(0.125), "0.13%");
        assert_eq!(format_percent(-0.125), "-0.13%");
        assert_eq!(format_percent(f64::NAN), "NaN%");
        assert_eq!(format_percent(f64::INFINITY), "Infinity%");
        assert_eq!(format_percent(f64::NEG_INFINITY), "-Infinity%");
    }

    #[test]
    fn test_rate_and_year_labels() {
        assert_eq!(format_rate(5.0), "5%");
        assert_eq!(format_rate(5.5), "5.5%");
        assert_eq!(format_rate(0.1), "0.1%");
        assert_eq!(year_label(12), "Year 12");
    }
}
