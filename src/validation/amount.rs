//! Token amount validation

use super::{Rejection, Verdict};

/// Fractional digits of a standard 18-decimal token
pub const DEFAULT_DECIMALS: u8 = 18;

/// A syntactically valid, non-negative decimal split at the point
struct Decimal<'a> {
    whole: &'a str,
    /// Fraction digits with trailing zeros removed
    fraction: &'a str,
}

fn parse_decimal(raw: &str) -> Result<Decimal<'_>, Rejection> {
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return Err(Rejection::NotANumber);
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(Rejection::NotANumber);
    }

    Ok(Decimal {
        whole,
        fraction: fraction.trim_end_matches('0'),
    })
}

fn check_precision<'a>(raw: &'a str, decimals: u8) -> Result<Decimal<'a>, Rejection> {
    let decimal = parse_decimal(raw)?;
    if decimal.fraction.len() > usize::from(decimals) {
        return Err(Rejection::TooManyDecimals);
    }
    Ok(decimal)
}

/// Validate a raw amount string against `decimals` fractional digits.
///
/// The number check runs first, then the precision check. Only significant
/// fraction digits count, so `"1.50000"` passes at one decimal. The accepted
/// value is the raw string unchanged.
pub fn validate_amount(raw: &str, decimals: u8) -> Verdict {
    check_precision(raw, decimals)
        .map(|_| raw.to_string())
        .into()
}

/// Convert an amount into an integer count of smallest units, as decimal digits.
pub fn to_base_units(raw: &str, decimals: u8) -> Result<String, Rejection> {
    let decimal = check_precision(raw, decimals)?;

    let mut digits = String::with_capacity(decimal.whole.len() + usize::from(decimals));
    digits.push_str(decimal.whole);
    digits.push_str(decimal.fraction);
    digits.push_str(&"0".repeat(usize::from(decimals) - decimal.fraction.len()));

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        Ok("0".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
