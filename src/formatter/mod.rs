//! Format value formatting engine

mod date;
mod fraction;
mod general;
mod number;
mod text;

pub use general::format_general;
pub use number::format_number;

use crate::ast::{Color, NumberFormat, Section};
use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::value::Value;

impl NumberFormat {
    /// Format a numeric value using this format code.
    ///
    /// Never fails: a value the selected section cannot show, such as a
    /// negative date or NaN, is rendered in General instead. Use
    /// [`try_format`](Self::try_format) to see the error.
    pub fn format(&self, value: f64, opts: &FormatOptions) -> String {
        match self.try_format(value, opts) {
            Ok(result) => result,
            Err(err) => {
                log::debug!("{err}; rendering {value} as General");
                format_general(value)
            }
        }
    }

    /// Try to format a numeric value using this format code.
    pub fn try_format(&self, value: f64, opts: &FormatOptions) -> Result<String, FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite { value });
        }

        let (section, dedicated_negative) = self.select_section(value);
        render_section(value, section, dedicated_negative, opts)
    }

    /// Select the section for a number by its sign.
    ///
    /// Returns the section and whether it is a dedicated negative section,
    /// in which case the value is shown without its minus sign.
    ///
    /// - 1 section: every number
    /// - 2 sections: zero and positive, negative
    /// - 3 or 4 sections: positive, negative, zero (the fourth is for text)
    fn select_section(&self, value: f64) -> (&Section, bool) {
        let sections = self.sections();
        match sections.len() {
            1 => (&sections[0], false),
            2 if value < 0.0 => (&sections[1], true),
            2 => (&sections[0], false),
            _ if value > 0.0 => (&sections[0], false),
            _ if value < 0.0 => (&sections[1], true),
            _ => (&sections[2], false),
        }
    }

    /// The section text values are rendered with, if any.
    fn text_section(&self) -> Option<&Section> {
        let sections = self.sections();
        match sections.len() {
            4 => Some(&sections[3]),
            1 if sections[0].has_text_placeholder() => Some(&sections[0]),
            _ => None,
        }
    }

    /// Format a text value using this format code.
    ///
    /// Uses the fourth section, or a lone section containing `@`. With
    /// neither the text is returned unchanged.
    pub fn format_text(&self, text: &str, opts: &FormatOptions) -> String {
        match self.text_section() {
            Some(section) => text::format_text(text, section, opts),
            None => text.to_string(),
        }
    }

    /// Format any cell value.
    ///
    /// Booleans render as `TRUE`/`FALSE` and empty cells as an empty string,
    /// whatever the format.
    pub fn format_value(&self, value: &Value<'_>, opts: &FormatOptions) -> String {
        match value {
            Value::Text(text) => self.format_text(text, opts),
            Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Value::Empty => String::new(),
            other => match other.to_serial(opts.date_system) {
                Some(serial) => self.format(serial, opts),
                None => {
                    log::debug!("{} value has no serial number", other.type_name());
                    String::new()
                }
            },
        }
    }

    /// The color of the section a value would be rendered with.
    pub fn color_for(&self, value: &Value<'_>) -> Option<Color> {
        match value {
            Value::Text(_) => self.text_section().and_then(|s| s.color),
            Value::Bool(_) | Value::Empty => None,
            other => {
                let serial = other.to_serial(crate::options::DateSystem::default())?;
                self.select_section(serial).0.color
            }
        }
    }
}

fn render_section(
    value: f64,
    section: &Section,
    dedicated_negative: bool,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    if section.is_general {
        let shown = if dedicated_negative { value.abs() } else { value };
        return Ok(format_general(shown));
    }

    if section.is_date {
        return date::format_date(value, section, opts);
    }

    let magnitude = value.abs();
    let body = match &section.fraction {
        Some(spec) => fraction::format_fraction(magnitude, section, spec, opts),
        None => format_number(magnitude, section, opts),
    };

    if value < 0.0 && !dedicated_negative {
        Ok(format!("-{body}"))
    } else {
        Ok(body)
    }
}
