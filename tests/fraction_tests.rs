use cellfmt::{FormatOptions, NumberFormat};

fn fmt(value: f64, code: &str) -> String {
    NumberFormat::parse(code).format(value, &FormatOptions::default())
}

#[test]
fn test_mixed_fraction() {
    assert_eq!(fmt(1.5, "# ?/?"), "1 1/2");
    assert_eq!(fmt(2.25, "# ?/?"), "2 1/4");
    assert_eq!(fmt(-1.5, "# ?/?"), "-1 1/2");
}

#[test]
fn test_zero_whole_part_is_hidden() {
    assert_eq!(fmt(0.5, "# ?/?"), "1/2");
    assert_eq!(fmt(0.75, "# ??/??"), " 3/4 ");
}

#[test]
fn test_zero_whole_part_with_zero_placeholder() {
    assert_eq!(fmt(0.5, "0 ?/?"), "0 1/2");
}

#[test]
fn test_two_digit_alignment() {
    assert_eq!(fmt(1.5, "# ??/??"), "1  1/2 ");
    assert_eq!(fmt(3.14159, "# ??/??"), "3 14/99");
}

#[test]
fn test_whole_number_blanks_fraction() {
    assert_eq!(fmt(3.0, "# ?/?"), "3    ");
    assert_eq!(fmt(0.0, "# ?/?"), "0    ");
}

#[test]
fn test_fraction_rounding_carries_into_whole() {
    // 0.98 is closest to 1/1 with one-digit denominators
    assert_eq!(fmt(1.98, "# ?/?"), "2    ");
}

#[test]
fn test_improper_fraction() {
    assert_eq!(fmt(1.5, "?/?"), "3/2");
    assert_eq!(fmt(2.75, "??/??"), "11/4 ");
}

#[test]
fn test_fixed_denominator() {
    assert_eq!(fmt(1.5, "# ?/4"), "1 2/4");
    assert_eq!(fmt(0.3, "# ??/100"), "30/100");
    assert_eq!(fmt(1.0 / 3.0, "?/8"), "3/8");
}

#[test]
fn test_fraction_with_suffix() {
    assert_eq!(fmt(1.5, "# ?/?\" in\""), "1 1/2 in");
}

#[test]
fn test_denominator_padding_follows_placeholders() {
    assert_eq!(fmt(0.5, "# ?/??"), "1/2 ");
    assert_eq!(fmt(0.5, "# ?/00"), "1/02");
    assert_eq!(fmt(0.5, "# ?/##"), "1/2");
    assert_eq!(fmt(1.75, "# ?/0?"), "1 3/04");
}

#[test]
fn test_zero_or_oversized_literal_denominator() {
    // `0` after the slash is a placeholder, so this is a one-digit best fit
    assert_eq!(fmt(0.5, "?/0"), "1/2");
    assert_eq!(fmt(1.25, "# ?/0"), "1 1/4");
    // A literal too large for the denominator falls back to one digit
    assert_eq!(fmt(0.5, "?/99999999999"), "1/2");
}

#[test]
fn test_wide_denominator_is_fast() {
    use std::time::{Duration, Instant};

    let format = NumberFormat::parse("# ?/?????????");
    let opts = FormatOptions::default();

    let start = Instant::now();
    let mut rendered = String::new();
    for _ in 0..100 {
        rendered = format.format(std::f64::consts::PI, &opts);
    }
    assert!(start.elapsed() < Duration::from_secs(1), "took {:?}", start.elapsed());

    let (whole, fraction) = rendered.trim().split_once(' ').unwrap();
    let (numerator, denominator) = fraction.trim().split_once('/').unwrap();
    let value = whole.parse::<f64>().unwrap()
        + numerator.trim().parse::<f64>().unwrap() / denominator.trim().parse::<f64>().unwrap();
    assert!((value - std::f64::consts::PI).abs() < 1e-6, "{rendered:?}");
}
