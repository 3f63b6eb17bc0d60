//! The General format: what a cell shows when no format is applied.

use crate::formatter::number::{increment_digits, split_rounded};

/// Significant digits kept in the scientific form.
const SCIENTIFIC_DIGITS: usize = 5;

/// Characters of decimal output a General cell can hold.
const FIXED_WIDTH: usize = 11;

/// Format a number in General style.
///
/// Values of magnitude 1e11 and above, or 1e-10 and below, switch to
/// scientific form; the rest are cut to 11 characters with the dropped
/// digits rounding the last kept one.
///
/// # Example
///
/// ```
/// use cellfmt::formatter::format_general;
///
/// assert_eq!(format_general(2.0 / 3.0), "0.666666667");
/// assert_eq!(format_general(123456789012.0), "1.23457E+11");
/// assert_eq!(format_general(-42.0), "-42");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    let body = if !(1e-10..1e11).contains(&abs) || abs == 1e-10 {
        format_scientific(abs)
    } else {
        format_fixed(abs)
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Cut the shortest decimal form of `abs` to [`FIXED_WIDTH`] characters.
fn format_fixed(abs: f64) -> String {
    let repr = abs.to_string();
    if repr.len() <= FIXED_WIDTH {
        return repr;
    }

    let chars: Vec<char> = repr.chars().collect();
    let mut kept = chars[..FIXED_WIDTH].to_vec();
    let round_up = chars[FIXED_WIDTH..]
        .iter()
        .find(|c| c.is_ascii_digit())
        .is_some_and(|d| *d >= '5');

    if round_up {
        // carry across the digits, stepping over the point
        let mut carried = true;
        for ch in kept.iter_mut().rev() {
            if *ch == '.' {
                continue;
            }
            let mut digit = [*ch];
            carried = increment_digits(&mut digit);
            *ch = digit[0];
            if !carried {
                break;
            }
        }
        if carried {
            kept.insert(0, '1');
        }
    }

    let mut out: String = kept.into_iter().collect();
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    out
}

/// `d.ddddE+XX`, trailing mantissa zeros removed.
fn format_scientific(abs: f64) -> String {
    let repr = format!("{abs:e}");
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let (mut int_digits, frac_digits) = split_rounded(mantissa.parse().unwrap_or(abs), SCIENTIFIC_DIGITS);
    let mut frac_digits = frac_digits.trim_end_matches('0').to_string();
    if int_digits == "10" {
        int_digits = "1".to_string();
        frac_digits.clear();
        exponent += 1;
    }

    let mut out = int_digits;
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(&frac_digits);
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("E{sign}{:02}", exponent.unsigned_abs()));
    out
}
