//! Decimal rescaling and digit grouping on plain digit strings.
//!
//! Raw token amounts routinely exceed `u128`, so nothing here parses the
//! value into a native integer.

use crate::errors::AmountError;

/// Returns the whole-unit part of `value` scaled down by `decimals` digits.
///
/// The fractional part is truncated, never rounded. An empty `decimals`
/// counts as zero.
pub fn adjust_value(value: &str, decimals: &str) -> Result<String, AmountError> {
    let value = value.trim_start_matches('0');
    if value.is_empty() {
        return Ok("0".to_string());
    }
    // non-digit ASCII passes through untouched; only the byte cut below
    // needs every position to be a char boundary
    if !value.is_ascii() {
        return Err(AmountError::InvalidValue(value.to_string()));
    }

    let decimals = if decimals.is_empty() { "0" } else { decimals };
    let decimals: i64 = decimals
        .parse()
        .map_err(|_| AmountError::InvalidDecimals(decimals.to_string()))?;
    if decimals < 0 {
        return Err(AmountError::NegativeDecimals);
    }

    // more decimals than addressable digits is just "below one unit"
    let decimals = usize::try_from(decimals).unwrap_or(usize::MAX);
    if value.len() <= decimals {
        return Ok("0".to_string());
    }

    Ok(value[..value.len() - decimals].to_string())
}

/// Groups a digit string in threes with `,`, e.g. `1234567` -> `1,234,567`.
pub fn format_with_commas(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + (len - 1) / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
