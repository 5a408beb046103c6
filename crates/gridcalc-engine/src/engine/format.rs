//! Number formatting and re-parsing of displayed values.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a number for display.
///
/// Integral values render without a fractional part. Other values are rounded
/// half away from zero on their shortest decimal form and render with exactly
/// two fractional digits, so `6.005` shows as `6.01`. Non-finite values render
/// as `inf`, `-inf` and `NaN`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        n.to_string()
    } else if n.fract() == 0.0 {
        // `{:.0}` keeps the sign of negative zero.
        if n == 0.0 {
            "0".to_string()
        } else {
            format!("{:.0}", n)
        }
    } else {
        match Decimal::from_str(&n.to_string()) {
            Ok(d) => format!(
                "{:.2}",
                d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            Err(_) => format!("{:.2}", n),
        }
    }
}

fn numeric_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("valid numeric prefix regex")
    })
}

/// Read the numeric value of cell text.
///
/// The longest leading decimal number is used, and text without one reads as
/// `0`. Words such as `inf` or `NaN` are text, not numbers.
pub fn leading_number(text: &str) -> f64 {
    numeric_prefix()
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
