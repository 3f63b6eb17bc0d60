//! End-to-end tests over format codes as they appear in real workbooks.

use cellfmt::ast::{Color, NamedColor};
use cellfmt::{DateSystem, FormatOptions, NumberFormat, Value};

fn fmt(value: f64, code: &str) -> String {
    NumberFormat::parse(code).format(value, &FormatOptions::default())
}

// ============================================================================
// Number Formats
// ============================================================================

#[test]
fn test_general_number() {
    let fmt = NumberFormat::parse("General");
    let opts = FormatOptions::default();

    assert!(fmt.is_general());
    assert_eq!(fmt.format(42.0, &opts), "42");
    assert_eq!(fmt.format(3.17, &opts), "3.17");
    assert_eq!(fmt.format(-0.5, &opts), "-0.5");
}

#[test]
fn test_accounting_format() {
    // `_(` reserves space and `*` fills, neither prints anything here
    assert_eq!(fmt(1234.56, "_($* #,##0.00_)"), "$1,234.56");
}

#[test]
fn test_parenthesised_negatives() {
    let fmt = NumberFormat::parse("#,##0;(#,##0)");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(1234.0, &opts), "1,234");
    assert_eq!(fmt.format(-1234.0, &opts), "(1,234)");
    assert_eq!(fmt.format(0.0, &opts), "0");
}

#[test]
fn test_percentage_formats() {
    assert_eq!(fmt(0.125, "0.00%"), "12.50%");
    assert_eq!(fmt(-0.25, "0%"), "-25%");
}

#[test]
fn test_scientific_formats() {
    assert_eq!(fmt(12345.0, "##0.0E+0"), "1.2E+4");
}

#[test]
fn test_fraction_format() {
    assert_eq!(fmt(1.5, "# ?/?"), "1 1/2");
    assert_eq!(fmt(0.5, "# ?/?"), "1/2");
}

// ============================================================================
// Date Formats
// ============================================================================

#[test]
fn test_long_date() {
    assert_eq!(
        fmt(46031.0, "dddd, mmmm d, yyyy"),
        "Friday, January 9, 2026"
    );
}

#[test]
fn test_short_dates() {
    assert_eq!(fmt(46031.0, "yyyy-mm-dd"), "2026-01-09");
    assert_eq!(fmt(46031.0, "m/d/yy"), "1/9/26");
    assert_eq!(fmt(46031.0, "d-mmm-yy"), "9-Jan-26");
}

// ============================================================================
// Time Formats
// ============================================================================

#[test]
fn test_twelve_hour_clock() {
    assert_eq!(fmt(0.75, "h:mm AM/PM"), "6:00 PM");
    assert_eq!(fmt(46031.25, "m/d/yyyy h:mm AM/PM"), "1/9/2026 6:00 AM");
}

#[test]
fn test_elapsed_time() {
    assert_eq!(fmt(1.5, "[h]:mm:ss"), "36:00:00");
}

// ============================================================================
// Date System
// ============================================================================

#[test]
fn test_date_1904_system() {
    let fmt = NumberFormat::parse("yyyy-mm-dd");
    let opts = FormatOptions::default().with_date_system(DateSystem::Date1904);

    assert_eq!(fmt.format(1.0, &opts), "1904-01-02");
    assert_eq!(fmt.format(44569.0, &opts), "2026-01-09");
}

// ============================================================================
// Colors and Conditions
// ============================================================================

#[test]
fn test_color_is_reported_not_rendered() {
    let fmt = NumberFormat::parse("[Red]0;[Blue]-0");
    let opts = FormatOptions::default();

    assert!(fmt.has_color());
    assert_eq!(fmt.format(5.0, &opts), "5");
    assert_eq!(fmt.format(-5.0, &opts), "-5");
    assert_eq!(
        fmt.color_for(&Value::from(-5.0)),
        Some(Color::Named(NamedColor::Blue))
    );
}

#[test]
fn test_conditions_do_not_select_sections() {
    let fmt = NumberFormat::parse("[>=100]\"high\";[<100]\"low\"");
    let opts = FormatOptions::default();

    // Sections are chosen by sign alone
    assert_eq!(fmt.format(150.0, &opts), "high");
    assert_eq!(fmt.format(50.0, &opts), "high");
    assert_eq!(fmt.format(-5.0, &opts), "low");
}

// ============================================================================
// Additional Edge Cases
// ============================================================================

#[test]
fn test_padding_only_format() {
    assert_eq!(fmt(42.0, "_-0_-"), "42");
}

#[test]
fn test_malformed_codes_never_panic() {
    let opts = FormatOptions::default();
    for code in ["[", "\"unterminated", "0.0.0", ";;;;;", "[h", "*", "\\", "E+", "?/"] {
        let fmt = NumberFormat::parse(code);
        let _ = fmt.format(1.5, &opts);
        let _ = fmt.format(-1.5, &opts);
        let _ = fmt.format(0.0, &opts);
    }
}

#[test]
fn test_integer_round_trip() {
    for v in [0i64, 1, -1, 42, 123_456_789, -987_654_321] {
        let rendered = fmt(v as f64, "0");
        assert_eq!(rendered.parse::<i64>().ok(), Some(v));
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let model = cellfmt::compile_format("#,##0.00;(#,##0.00)");
    let opts = FormatOptions::default();
    let first = cellfmt::render_value(-1234.5, &model, &opts);
    let second = cellfmt::render_value(-1234.5, &model, &opts);
    assert_eq!(first, "(1,234.50)");
    assert_eq!(first, second);
}
