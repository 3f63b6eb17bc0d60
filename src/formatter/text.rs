//! Text formatting with `@`.

use crate::ast::{FormatPart, Section};
use crate::options::FormatOptions;

/// Substitute `text` for every `@` in the section, keeping literals around it.
///
/// A section without `@` shows the text unchanged.
pub fn format_text(text: &str, section: &Section, opts: &FormatOptions) -> String {
    if !section.has_text_placeholder() {
        return text.to_string();
    }

    let mut result = String::new();
    push_parts(&mut result, &section.whole, text);
    if section.has_decimal_point {
        result.push(opts.locale.decimal_separator);
    }
    push_parts(&mut result, &section.fractional, text);
    result
}

fn push_parts(result: &mut String, parts: &[FormatPart], text: &str) {
    for part in parts {
        match part {
            FormatPart::TextPlaceholder => result.push_str(text),
            FormatPart::Literal(ch) => result.push(*ch),
            FormatPart::Currency(symbol) => result.push_str(symbol),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn fmt(text: &str, code: &str) -> String {
        let format = parse(code);
        format_text(text, &format.sections()[0], &FormatOptions::default())
    }

    #[test]
    fn test_placeholder_with_literals() {
        assert_eq!(fmt("abc", "\"<\"@\">\""), "<abc>");
        assert_eq!(fmt("x", "@ @"), "x x");
    }

    #[test]
    fn test_no_placeholder_passes_through() {
        assert_eq!(fmt("abc", "0.00"), "abc");
    }
}
