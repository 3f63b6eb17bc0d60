use cellfmt::{FormatOptions, NumberFormat};

fn fmt(value: f64, code: &str) -> String {
    NumberFormat::parse(code).format(value, &FormatOptions::default())
}

#[test]
fn test_format_integer() {
    let fmt = NumberFormat::parse("0");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(42.0, &opts), "42");
    assert_eq!(fmt.format(42.7, &opts), "43"); // Rounds
    assert_eq!(fmt.format(0.4, &opts), "0");
    assert_eq!(fmt.format(2.5, &opts), "3"); // Half away from zero
    assert_eq!(fmt.format(-2.5, &opts), "-3");
}

#[test]
fn test_format_decimal() {
    let fmt = NumberFormat::parse("0.00");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(5.0, &opts), "5.00");
    assert_eq!(fmt.format(42.567, &opts), "42.57");
    assert_eq!(fmt.format(2.675, &opts), "2.68");
    assert_eq!(fmt.format(-0.5, &opts), "-0.50");
}

#[test]
fn test_format_thousands() {
    let fmt = NumberFormat::parse("#,##0");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(1234567.0, &opts), "1,234,567");
    assert_eq!(fmt.format(123.0, &opts), "123");
    assert_eq!(fmt.format(0.0, &opts), "0");
    assert_eq!(fmt.format(-1234.0, &opts), "-1,234");
}

#[test]
fn test_format_thousands_with_decimals() {
    assert_eq!(fmt(5123.0, "#,##0.00"), "5,123.00");
    assert_eq!(fmt(1234567.891, "#,##0.00"), "1,234,567.89");
    assert_eq!(fmt(999.999, "#,##0.00"), "1,000.00");
}

#[test]
fn test_thousands_ignore_digits_in_suffix() {
    assert_eq!(fmt(1234.0, "#,##0\" m2\""), "1,234 m2");
    assert_eq!(fmt(1234567.0, "#,##0 \"km 2\""), "1,234,567 km 2");
    assert_eq!(fmt(-1234.0, "#,##0\" m2\";(#,##0)\" m2\""), "(1,234) m2");
}

#[test]
fn test_format_percentage() {
    let fmt = NumberFormat::parse("0%");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(0.25, &opts), "25%");
    assert_eq!(fmt.format(0.42, &opts), "42%");
    assert_eq!(fmt.format(1.5, &opts), "150%");
}

#[test]
fn test_format_percentage_decimals() {
    assert_eq!(fmt(0.1234, "0.00%"), "12.34%");
    assert_eq!(fmt(0.5, "0.0%"), "50.0%");
}

#[test]
fn test_format_hash_placeholder() {
    let fmt = NumberFormat::parse("#.##");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(42.5, &opts), "42.5");
    assert_eq!(fmt.format(42.0, &opts), "42.");
    assert_eq!(fmt.format(0.5, &opts), ".5");
}

#[test]
fn test_format_question_placeholder() {
    assert_eq!(fmt(5.0, "???"), "  5");
    assert_eq!(fmt(1.5, "0.0?"), "1.5 ");
}

#[test]
fn test_format_zero_padding() {
    assert_eq!(fmt(42.0, "00000"), "00042");
    assert_eq!(fmt(1.5, "000.000"), "001.500");
}

#[test]
fn test_leftmost_placeholder_takes_extra_digits() {
    assert_eq!(fmt(123456.0, "00"), "123456");
    assert_eq!(fmt(123456.0, "#"), "123456");
}

#[test]
fn test_format_negative_section() {
    let fmt = NumberFormat::parse("0;-0");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(5.0, &opts), "5");
    assert_eq!(fmt.format(-5.0, &opts), "-5");
}

#[test]
fn test_format_accounting_parens() {
    let fmt = NumberFormat::parse("#,##0 ;(#,##0)");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(1234.0, &opts), "1,234 ");
    assert_eq!(fmt.format(-1234.0, &opts), "(1,234)");
    assert_eq!(fmt.format(0.0, &opts), "0 ");
}

#[test]
fn test_parens_survive_short_values() {
    assert_eq!(fmt(1.0, "(#,###)"), "(1)");
    assert_eq!(fmt(1234.0, "(#,###)"), "(1,234)");
}

#[test]
fn test_zero_section() {
    let fmt = NumberFormat::parse("0.00;(0.00);\"-\"");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(1.0, &opts), "1.00");
    assert_eq!(fmt.format(-1.0, &opts), "(1.00)");
    assert_eq!(fmt.format(0.0, &opts), "-");
}

#[test]
fn test_empty_negative_section() {
    assert_eq!(fmt(-5.0, "0;"), "");
}

#[test]
fn test_trailing_comma_scaling() {
    assert_eq!(fmt(1234567.0, "#,##0,"), "1,235");
    assert_eq!(fmt(1234567.0, "0.0,,"), "1.2");
    assert_eq!(fmt(12.0, "0,%"), "1%");
}

#[test]
fn test_literal_comma_after_placeholder() {
    assert_eq!(fmt(5.0, "0,\"x\""), "5,x");
}

#[test]
fn test_quoted_and_escaped_literals() {
    assert_eq!(fmt(5.0, "\"$\"0.00"), "$5.00");
    assert_eq!(fmt(5.0, "\\$0.00"), "$5.00");
    assert_eq!(fmt(5.0, "0 \"units\""), "5 units");
    assert_eq!(fmt(5.0, "$0"), "$5");
}

#[test]
fn test_currency_bracket() {
    assert_eq!(fmt(1234.5, "[$€-407]#,##0.00"), "€1,234.50");
    assert_eq!(fmt(1234.5, "[$-409]#,##0.00"), "1,234.50");
}

#[test]
fn test_skip_and_fill_emit_nothing() {
    assert_eq!(fmt(1234.56, "_($* #,##0.00_)"), "$1,234.56");
    assert_eq!(fmt(5.0, "*-0"), "5");
}

#[test]
fn test_color_does_not_render() {
    assert_eq!(fmt(5.0, "[Red]0.0"), "5.0");
    assert_eq!(fmt(-5.0, "0;[Red]0"), "5");
}

#[test]
fn test_scientific() {
    let fmt = NumberFormat::parse("0.00E+00");
    let opts = FormatOptions::default();

    assert_eq!(fmt.format(12345.0, &opts), "1.23E+04");
    assert_eq!(fmt.format(0.000123, &opts), "1.23E-04");
    assert_eq!(fmt.format(-12345.0, &opts), "-1.23E+04");
    assert_eq!(fmt.format(1.0, &opts), "1.00E+00");
}

#[test]
fn test_scientific_mantissa_carry() {
    assert_eq!(fmt(9.999, "0.00E+00"), "1.00E+01");
}

#[test]
fn test_scientific_minus_only_sign() {
    assert_eq!(fmt(12345.0, "0.0E-0"), "1.2E4");
    assert_eq!(fmt(0.012, "0.0E-0"), "1.2E-2");
}

#[test]
fn test_general_section_in_multi_section_format() {
    assert_eq!(fmt(1.5, "General;(General)"), "1.5");
    // The keyword takes over the whole section, parentheses included
    assert_eq!(fmt(-1.5, "General;(General)"), "1.5");
}

#[test]
fn test_number_through_text_placeholder() {
    assert_eq!(fmt(1.5, "@"), "1.5");
    assert_eq!(fmt(-1.5, "@"), "-1.5");
}

#[test]
fn test_non_finite_renders_general() {
    assert_eq!(fmt(f64::NAN, "0.00"), "NaN");
    assert_eq!(fmt(f64::NEG_INFINITY, "0.00"), "-Infinity");
}

#[test]
fn test_integer_round_trip() {
    let model = NumberFormat::parse("0");
    let opts = FormatOptions::default();
    for v in [0i64, 1, -1, 7, 42, 1000, -98765, 123_456_789, 99_999_999_999] {
        let rendered = model.format(v as f64, &opts);
        assert_eq!(rendered.parse::<i64>().unwrap(), v, "{rendered}");
    }
}
