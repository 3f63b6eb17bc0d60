//! Fraction formatting (`# ?/?`, `?/8`, `# ??/??`).

use crate::ast::{DigitPlaceholder, FormatPart, FractionDenom, FractionSpec, Section};
use crate::formatter::number::{render_whole, scale_value, to_significant};
use crate::options::FormatOptions;

/// Widest best-fit denominator searched exhaustively; wider ones use
/// continued fractions.
const LINEAR_SEARCH_DIGITS: u8 = 4;

/// Find the fraction closest to `target` with a denominator of at most
/// `digits` digits.
pub(crate) fn best_fraction(target: f64, digits: u8) -> (u64, u64) {
    let max_denominator = 10u64.pow(u32::from(digits.max(1))) - 1;
    if digits <= LINEAR_SEARCH_DIGITS {
        nearest_fraction(target, max_denominator)
    } else {
        convergent_fraction(target, max_denominator)
    }
}

/// Linear search over every denominator up to `max_denominator`.
///
/// Denominators are tried in increasing order and only a strictly smaller
/// error replaces the current best, so the smallest exact denominator wins.
fn nearest_fraction(target: f64, max_denominator: u64) -> (u64, u64) {
    if target <= 0.0 {
        return (0, 1);
    }

    let mut best = (target.round() as u64, 1);
    let mut best_error = (target - best.0 as f64).abs();

    for denominator in 2..=max_denominator.max(1) {
        if best_error == 0.0 {
            break;
        }
        let numerator = (target * denominator as f64).round();
        let error = (target - numerator / denominator as f64).abs();
        if error < best_error {
            best = (numerator as u64, denominator);
            best_error = error;
        }
    }

    best
}

/// Last continued-fraction convergent of `target` whose denominator fits.
fn convergent_fraction(target: f64, max_denominator: u64) -> (u64, u64) {
    if target <= 1e-10 {
        return (0, 1);
    }

    let mut x = target;
    let mut a = x.floor();
    let mut h = (a as u64, 1u64);
    let mut k = (1u64, 0u64);

    // 64-bit convergents cannot go much deeper than this
    for _ in 0..40 {
        if (x - a).abs() < 1e-10 {
            break;
        }
        x = 1.0 / (x - a);
        a = x.floor();

        let step = a as u64;
        let Some(k_next) = step.checked_mul(k.0).and_then(|v| v.checked_add(k.1)) else {
            break;
        };
        if k_next > max_denominator {
            break;
        }
        let Some(h_next) = step.checked_mul(h.0).and_then(|v| v.checked_add(h.1)) else {
            break;
        };

        h = (h_next, h.0);
        k = (k_next, k.0);
    }

    (h.0, k.0.max(1))
}

/// Right-align `value` against its placeholders.
fn pad_numerator(value: u64, placeholders: &[DigitPlaceholder]) -> String {
    let digits = value.to_string();
    let missing = placeholders.len().saturating_sub(digits.len());

    let mut out: String = placeholders[..missing]
        .iter()
        .filter_map(DigitPlaceholder::empty_char)
        .collect();
    out.push_str(&digits);
    out
}

/// Pad a best-fit denominator: `0` adds leading zeros, `?` trailing spaces
/// so the slash stays aligned, `#` nothing.
fn pad_denominator(value: u64, placeholders: &[DigitPlaceholder]) -> String {
    let digits = value.to_string();
    let missing = placeholders.len().saturating_sub(digits.len());
    let unused = &placeholders[..missing];

    let zeros = unused.iter().filter(|p| **p == DigitPlaceholder::Zero).count();
    let spaces = unused.iter().filter(|p| **p == DigitPlaceholder::Question).count();

    let mut out = "0".repeat(zeros);
    out.push_str(&digits);
    out.push_str(&" ".repeat(spaces));
    out
}

fn render_suffix(suffix: &[FormatPart]) -> String {
    suffix
        .iter()
        .filter_map(|part| match part {
            FormatPart::Literal(ch) => Some(ch.to_string()),
            FormatPart::Currency(symbol) => Some(symbol.clone()),
            _ => None,
        })
        .collect()
}

/// Format a non-negative number as a fraction.
///
/// With a digit placeholder before the numerator the whole number is split
/// off and only the remainder becomes a fraction; without one the whole value
/// is written as an improper fraction.
pub fn format_fraction(
    value: f64,
    section: &Section,
    spec: &FractionSpec,
    _opts: &FormatOptions,
) -> String {
    let value = to_significant(scale_value(value, section));
    let is_mixed = section.whole.iter().any(FormatPart::is_digit);

    let (mut whole, target) = if is_mixed {
        (value.trunc(), value.fract())
    } else {
        (0.0, value)
    };

    let (mut numerator, denominator) = match spec.denominator {
        FractionDenom::UpToDigits(digits) => best_fraction(target, digits),
        FractionDenom::Fixed(d) => {
            let d = u64::from(d.max(1));
            ((target * d as f64).round() as u64, d)
        }
    };

    if is_mixed && numerator >= denominator {
        whole += (numerator / denominator) as f64;
        numerator %= denominator;
    }

    let mut result = String::new();

    // `# ?/?` with nothing but a fraction shows no integer part at all
    let hide_whole = whole == 0.0
        && numerator != 0
        && section.whole.iter().all(|part| match part {
            FormatPart::Digit(placeholder) => !placeholder.is_required(),
            FormatPart::Literal(' ') => true,
            _ => false,
        });
    if !hide_whole {
        let whole_digits = if whole == 0.0 {
            if numerator == 0 { "0".to_string() } else { String::new() }
        } else {
            format!("{whole:.0}")
        };
        result.push_str(&render_whole(&section.whole, &whole_digits, None));
    }

    if is_mixed && numerator == 0 {
        let width = spec.numerator.len() + 1 + spec.denominator.width();
        result.push_str(&" ".repeat(width));
    } else {
        result.push_str(&pad_numerator(numerator, &spec.numerator));
        result.push('/');
        match spec.denominator {
            FractionDenom::UpToDigits(_) => {
                result.push_str(&pad_denominator(denominator, &spec.denominator_digits));
            }
            FractionDenom::Fixed(_) => result.push_str(&denominator.to_string()),
        }
    }

    result.push_str(&render_suffix(&spec.suffix));
    result
}
