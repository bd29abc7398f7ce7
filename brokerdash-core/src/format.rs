//! Display formatting. All rounding of derived values happens here and nowhere
//! upstream.

use crate::models::ResponseTime;

/// Rendered in place of an aggregate that has no data behind it.
pub const ZERO_STATE: &str = "—";

/// Groups digits in threes: `142000000` becomes `142,000,000`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(amount: u64, symbol: &str) -> String {
    format!("{}{}", symbol, format_count(amount))
}

/// Short form used on KPI cards and chart labels: `$142.0M`, `$826.0K`, `$950`.
pub fn format_compact_currency(amount: u64, symbol: &str) -> String {
    format!("{}{}", symbol, format_compact(amount))
}

/// The unit is picked after rounding to one decimal, so `999_950` reads
/// `1.0M` rather than `1000.0K`.
pub fn format_compact(n: u64) -> String {
    const SUFFIXES: [&str; 3] = ["K", "M", "B"];

    if n < 1_000 {
        return n.to_string();
    }

    let mut scaled = n as f64 / 1_000.0;
    let mut unit = 0;
    while unit + 1 < SUFFIXES.len() && (scaled * 10.0).round() >= 10_000.0 {
        scaled /= 1_000.0;
        unit += 1;
    }
    format!("{:.1}{}", scaled, SUFFIXES[unit])
}

/// An already-scaled value in millions, e.g. from a revenue series.
pub fn format_millions(value: f64, symbol: &str) -> String {
    format!("{}{:.1}M", symbol, value)
}

pub fn format_thousands(value: f64, symbol: &str) -> String {
    format!("{}{:.1}K", symbol, value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| ZERO_STATE.to_string())
}

pub fn format_optional_response(value: Option<ResponseTime>) -> String {
    value
        .map(|t| t.to_string())
        .unwrap_or_else(|| ZERO_STATE.to_string())
}

pub fn format_rating(value: Option<f32>) -> String {
    value
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| ZERO_STATE.to_string())
}

pub fn format_rank(rank: Option<usize>, of: usize) -> String {
    match rank {
        Some(rank) => format!("#{} of {}", rank, of),
        None => ZERO_STATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(142_000_000), "142,000,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_840_000, "$"), "$2,840,000");
        assert_eq!(format_currency(0, "AED "), "AED 0");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact_currency(142_000_000, "$"), "$142.0M");
        assert_eq!(format_compact_currency(826_000, "$"), "$826.0K");
        assert_eq!(format_compact_currency(950, "$"), "$950");
        assert_eq!(format_compact(2_500_000_000), "2.5B");
    }

    #[test]
    fn test_format_compact_unit_boundaries() {
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(999_949), "999.9K");
        assert_eq!(format_compact(999_950), "1.0M");
        assert_eq!(format_compact(999_999_999), "1.0B");
        assert_eq!(format_compact(1_500_000_000_000), "1500.0B");
    }

    #[test]
    fn test_scaled_values() {
        assert_eq!(format_millions(92.4, "$"), "$92.4M");
        assert_eq!(format_thousands(2840.0, "$"), "$2840.0K");
    }

    #[test]
    fn test_zero_states() {
        assert_eq!(format_optional_percent(None), "—");
        assert_eq!(format_optional_percent(Some(16.24)), "16.2%");
        assert_eq!(format_optional_response(None), "—");
        assert_eq!(
            format_optional_response(Some(ResponseTime::from_minutes(8))),
            "8m"
        );
        assert_eq!(format_rating(None), "—");
        assert_eq!(format_rating(Some(4.84)), "4.8");
        assert_eq!(format_rank(Some(2), 6), "#2 of 6");
        assert_eq!(format_rank(None, 0), "—");
    }
}
