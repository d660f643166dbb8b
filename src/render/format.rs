use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::warn;

/// Prices of 1000 and up are shown without decimals; smaller ones with
/// four significant digits.
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        // no exponent form for large values
        return format!("{price:.0}");
    }
    format_significant(price, 4)
}

/// `%g`-style rendering: `digits` significant digits, trailing zeros
/// dropped, exponent form for very small or large magnitudes.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}"))
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

pub fn format_percent(change: Option<f64>) -> String {
    match change {
        Some(change) => format!("{change:+.2}"),
        None => "?".to_string(),
    }
}

pub fn format_millions(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.0}", value / 1_000_000.0),
        None => "?".to_string(),
    }
}

/// Market cap from a decimal string, in whole millions. Decimal math keeps
/// large caps exact.
pub fn format_millions_decimal(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "?".to_string();
    };
    match Decimal::from_str(raw) {
        Ok(cap) => (cap / Decimal::from(1_000_000))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        Err(e) => {
            warn!(value = raw, err = %e, "failed conversion to decimal");
            "?".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_large() {
        assert_eq!(format_price(7512.678), "7513");
        assert_eq!(format_price(1000.0), "1000");
        assert_eq!(format_price(64123.4), "64123");
    }

    #[test]
    fn test_format_price_small() {
        assert_eq!(format_price(3.21), "3.21");
        assert_eq!(format_price(123.456), "123.5");
        assert_eq!(format_price(0.5), "0.5");
        assert_eq!(format_price(1.0), "1");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_format_price_rounds_up_to_thousand() {
        assert_eq!(format_price(999.96), "1000");
    }

    #[test]
    fn test_format_price_tiny_uses_exponent() {
        assert_eq!(format_price(0.00001234), "1.234e-05");
        assert_eq!(format_price(0.0001), "0.0001");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(1.254)), "+1.25");
        assert_eq!(format_percent(Some(-0.5)), "-0.50");
        assert_eq!(format_percent(Some(0.0)), "+0.00");
        assert_eq!(format_percent(None), "?");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(Some(2_100_000_000.0)), "2100");
        assert_eq!(format_millions(Some(1_600_000.0)), "2");
        assert_eq!(format_millions(None), "?");
    }

    #[test]
    fn test_format_millions_decimal() {
        assert_eq!(format_millions_decimal(Some("954000000.0")), "954");
        assert_eq!(format_millions_decimal(Some("128512345678.9")), "128512");
        assert_eq!(format_millions_decimal(Some("2500000")), "3");
        assert_eq!(format_millions_decimal(Some("garbage")), "?");
        assert_eq!(format_millions_decimal(None), "?");
    }
}
