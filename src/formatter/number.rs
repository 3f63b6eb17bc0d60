//! Number formatting (integers, decimals, percentages, scientific notation)

use crate::ast::{DigitPlaceholder, FormatPart, Section};
use crate::formatter::general::format_general;
use crate::options::FormatOptions;

/// Reduce a value to the 15 significant digits a spreadsheet stores.
pub(crate) fn to_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    format!("{value:.14e}").parse().unwrap_or(value)
}

/// Adds one to a run of ASCII digits, returning true if the carry ran off the left end.
pub(crate) fn increment_digits(digits: &mut [char]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return false;
        }
    }
    true
}

/// Round a non-negative value half away from zero to `places` decimals and
/// split it into integer and fractional digit strings.
///
/// Rounding works on the decimal representation so 2.675 becomes 2.68, as a
/// spreadsheet shows it, rather than 2.67 from its binary expansion. The
/// fractional string always has exactly `places` digits.
pub(crate) fn split_rounded(value: f64, places: usize) -> (String, String) {
    let repr = to_significant(value).to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(places))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5');
    if round_up && increment_digits(&mut digits) {
        digits.insert(0, '1');
        int_len += 1;
    }

    let fractional = digits.split_off(int_len);
    (digits.into_iter().collect(), fractional.into_iter().collect())
}

fn digit_count(parts: &[FormatPart]) -> usize {
    parts.iter().filter(|p| p.is_digit()).count()
}

/// Render integer digits right to left against the whole-part tokens.
///
/// `0` pads with zero, `?` with a space and `#` with nothing; the leftmost
/// placeholder takes every digit that is left over. Literals are emitted where
/// they stand whether or not digits remain. `digits` is empty for a zero
/// integer part.
pub(crate) fn render_whole(parts: &[FormatPart], digits: &str, general: Option<&str>) -> String {
    let digits: Vec<char> = digits.chars().collect();
    let mut remaining = digits.len();
    let leftmost = parts.iter().position(FormatPart::is_digit);

    let mut out: Vec<char> = Vec::with_capacity(parts.len() + digits.len());
    for (index, part) in parts.iter().enumerate().rev() {
        match part {
            FormatPart::Digit(placeholder) => {
                if Some(index) == leftmost && remaining > 0 {
                    out.extend(digits[..remaining].iter().rev());
                    remaining = 0;
                } else if remaining > 0 {
                    remaining -= 1;
                    out.push(digits[remaining]);
                } else if let Some(c) = placeholder.empty_char() {
                    out.push(c);
                }
            }
            FormatPart::Literal(ch) => out.push(*ch),
            FormatPart::Currency(symbol) => out.extend(symbol.chars().rev()),
            FormatPart::TextPlaceholder => {
                if let Some(text) = general {
                    out.extend(text.chars().rev());
                }
            }
            // Date parts never reach a numeric section
            _ => {}
        }
    }

    out.into_iter().rev().collect()
}

/// Render fractional digits left to right.
///
/// Past the last significant digit `0` emits a zero, `?` a space and `#`
/// nothing.
fn render_fractional(parts: &[FormatPart], digits: &str) -> String {
    let significant: Vec<char> = digits.trim_end_matches('0').chars().collect();
    let mut position = 0;

    let mut out = String::new();
    for part in parts {
        match part {
            FormatPart::Digit(placeholder) => {
                if let Some(digit) = significant.get(position) {
                    out.push(*digit);
                } else if let Some(c) = placeholder.empty_char() {
                    out.push(c);
                }
                position += 1;
            }
            FormatPart::Literal(ch) => out.push(*ch),
            FormatPart::Currency(symbol) => out.push_str(symbol),
            _ => {}
        }
    }
    out
}

/// Insert a separator every three digits of the digit run that ends at the
/// last digit of `s`, leaving any non-digit prefix and suffix alone.
pub(crate) fn group_thousands(s: &str, separator: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let Some(end) = chars.iter().rposition(|c| c.is_ascii_digit()) else {
        return s.to_string();
    };
    let mut start = end;
    while start > 0 && chars[start - 1].is_ascii_digit() {
        start -= 1;
    }

    let mut out = String::with_capacity(s.len() + (end - start) / 3);
    out.extend(&chars[..start]);
    let run_len = end - start + 1;
    for (offset, ch) in chars[start..=end].iter().enumerate() {
        if offset > 0 && (run_len - offset) % 3 == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out.extend(&chars[end + 1..]);
    out
}

/// Applies percent and trailing-comma scaling.
pub(crate) fn scale_value(value: f64, section: &Section) -> f64 {
    let mut scaled = value;
    if section.is_percent {
        scaled *= 100.0;
    }
    for _ in 0..section.thousands_scale {
        scaled /= 1000.0;
    }
    scaled
}

/// Format a non-negative number according to a numeric section.
///
/// The caller decides on the sign; `value` must not be negative.
pub fn format_number(value: f64, section: &Section, opts: &FormatOptions) -> String {
    let general = section
        .has_text_placeholder()
        .then(|| format_general(value));
    let value = scale_value(value, section);

    if let Some(exponent) = section.exponential {
        return format_scientific(value, section, exponent.upper, exponent.show_plus, opts);
    }

    let places = digit_count(&section.fractional);
    let (int_digits, frac_digits) = split_rounded(value, places);
    let int_digits = if int_digits == "0" { "" } else { int_digits.as_str() };

    // `.00` still shows the integer part in front of the point
    let mut whole_parts = section.whole.clone();
    if section.has_decimal_point && digit_count(&whole_parts) == 0 {
        whole_parts.push(FormatPart::Digit(DigitPlaceholder::Hash));
    }

    // Only the digit run gets grouped, never digits in trailing literals
    let (digits_part, trailing) = match whole_parts.iter().rposition(FormatPart::is_digit) {
        Some(last) => whole_parts.split_at(last + 1),
        None => (whole_parts.as_slice(), &[][..]),
    };

    let mut result = render_whole(digits_part, int_digits, general.as_deref());
    if section.has_thousands_separator {
        result = group_thousands(&result, opts.locale.thousands_separator);
    }
    result.push_str(&render_whole(trailing, "", general.as_deref()));

    if section.has_decimal_point {
        result.push(opts.locale.decimal_separator);
        result.push_str(&render_fractional(&section.fractional, &frac_digits));
    }

    result
}

/// Format a non-negative number as `mantissa E exponent` with 1 <= mantissa < 10.
fn format_scientific(
    value: f64,
    section: &Section,
    upper: bool,
    show_plus: bool,
    opts: &FormatOptions,
) -> String {
    let places = digit_count(&section.fractional);

    let (mantissa, mut exponent): (f64, i32) = if value == 0.0 {
        (0.0, 0)
    } else {
        let repr = format!("{:e}", to_significant(value));
        match repr.split_once('e') {
            Some((m, e)) => (m.parse().unwrap_or(0.0), e.parse().unwrap_or(0)),
            None => (value, 0),
        }
    };

    let (mut int_digits, mut frac_digits) = split_rounded(mantissa, places);
    if int_digits == "10" {
        int_digits = "1".to_string();
        frac_digits = "0".repeat(places);
        exponent += 1;
    }
    let int_digits = if int_digits == "0" { "" } else { int_digits.as_str() };

    let mut result = render_whole(&section.whole, int_digits, None);
    if section.has_decimal_point {
        result.push(opts.locale.decimal_separator);
        result.push_str(&render_fractional(&section.fractional, &frac_digits));
    }

    result.push(if upper { 'E' } else { 'e' });
    if exponent < 0 {
        result.push('-');
    } else if show_plus {
        result.push('+');
    }
    let exp_digits = if exponent == 0 {
        String::new()
    } else {
        exponent.unsigned_abs().to_string()
    };
    result.push_str(&render_whole(&section.exponent, &exp_digits, None));

    result
}
