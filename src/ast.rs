//! Compiled representation of a format code.

use std::str::FromStr;

/// Named colors supported in format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl FromStr for NamedColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(NamedColor::Black),
            "blue" => Ok(NamedColor::Blue),
            "cyan" => Ok(NamedColor::Cyan),
            "green" => Ok(NamedColor::Green),
            "magenta" => Ok(NamedColor::Magenta),
            "red" => Ok(NamedColor::Red),
            "white" => Ok(NamedColor::White),
            "yellow" => Ok(NamedColor::Yellow),
            _ => Err(()),
        }
    }
}

/// Color specification in a format section. Never affects the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(NamedColor),
    /// `[Color1]` through `[Color56]`
    Indexed(u8),
}

/// Digit placeholder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// `0` - Display digit or zero
    Zero,
    /// `#` - Display digit or nothing
    Hash,
    /// `?` - Display digit or space
    Question,
}

impl DigitPlaceholder {
    /// Returns true if this placeholder requires a digit (shows 0 for missing).
    pub fn is_required(&self) -> bool {
        matches!(self, DigitPlaceholder::Zero)
    }

    /// Returns the character to display when no digit is present.
    pub fn empty_char(&self) -> Option<char> {
        match self {
            DigitPlaceholder::Zero => Some('0'),
            DigitPlaceholder::Hash => None,
            DigitPlaceholder::Question => Some(' '),
        }
    }
}

/// Calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// `yy`
    Year2,
    /// `yyy`, `yyyy`
    Year4,
    /// `m`
    Month,
    /// `mm`
    Month2,
    /// `mmm` - Jan, Feb, ...
    MonthAbbr,
    /// `mmmm` - January, February, ...
    MonthFull,
    /// `mmmmm` - J, F, M, ...
    MonthLetter,
    /// `d`
    Day,
    /// `dd`
    Day2,
    /// `ddd` - Sun, Mon, ...
    DayAbbr,
    /// `dddd` - Sunday, Monday, ...
    DayFull,
}

/// Time-of-day components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePart {
    /// `h` (1-12 with AM/PM, else 0-23)
    Hour,
    /// `hh`
    Hour2,
    /// `m` after an hour or before a second
    Minute,
    /// `mm` after an hour or before a second
    Minute2,
    /// `s`
    Second,
    /// `ss`
    Second2,
    /// `.0`, `.00`, `.000` following seconds
    SubSecond(u8),
}

/// AM/PM marker style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmPmStyle {
    /// `AM/PM`
    Upper,
    /// `am/pm`
    Lower,
    /// `A/P`
    ShortUpper,
    /// `a/p`
    ShortLower,
}

/// Bracketed elapsed-time component, computed from the whole serial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedPart {
    /// `[h]`
    Hours,
    /// `[hh]`
    Hours2,
    /// `[m]`
    Minutes,
    /// `[mm]`
    Minutes2,
    /// `[s]`
    Seconds,
    /// `[ss]`
    Seconds2,
}

/// Fraction denominator specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionDenom {
    /// `?/??` - best fit with at most this many digits
    UpToDigits(u8),
    /// `?/16` - literal denominator
    Fixed(u32),
}

impl FractionDenom {
    /// Width reserved for the denominator when it is padded or blanked.
    pub fn width(&self) -> usize {
        match self {
            FractionDenom::UpToDigits(digits) => *digits as usize,
            FractionDenom::Fixed(d) => d.to_string().len(),
        }
    }
}

/// The numerator/denominator half of a fraction section.
///
/// The integer part and any prefix stay in [`Section::whole`].
#[derive(Debug, Clone, PartialEq)]
pub struct FractionSpec {
    pub numerator: Vec<DigitPlaceholder>,
    pub denominator: FractionDenom,
    /// Placeholders of a best-fit denominator; empty for a literal one.
    pub denominator_digits: Vec<DigitPlaceholder>,
    /// Literals following the denominator.
    pub suffix: Vec<FormatPart>,
}

/// Scientific notation marker (`E+`, `E-`, `e+`, `e-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    /// True for `E`, false for `e`
    pub upper: bool,
    /// True for `E+` (always show sign), false for `E-` (minus only)
    pub show_plus: bool,
}

/// A single token of a compiled section.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatPart {
    /// Literal character: quoted text, escapes, separators, `%`, and anything unrecognised
    Literal(char),
    /// Digit placeholder (`0`, `#`, `?`)
    Digit(DigitPlaceholder),
    /// Currency symbol from a `[$sym-lcid]` bracket
    Currency(String),
    /// `@`
    TextPlaceholder,
    Date(DatePart),
    Time(TimePart),
    Elapsed(ElapsedPart),
    AmPm(AmPmStyle),
}

impl FormatPart {
    /// Returns true for calendar, clock, elapsed and AM/PM parts.
    pub fn is_date_part(&self) -> bool {
        matches!(
            self,
            FormatPart::Date(_) | FormatPart::Time(_) | FormatPart::Elapsed(_) | FormatPart::AmPm(_)
        )
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, FormatPart::Digit(_))
    }
}

/// One `;`-delimited section of a format code.
///
/// Numeric sections are split at the decimal point into `whole` and
/// `fractional`, and at the exponent marker into `exponent`. Date sections
/// keep every token, in order, in `whole`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub whole: Vec<FormatPart>,
    pub fractional: Vec<FormatPart>,
    pub exponent: Vec<FormatPart>,
    /// True if the section contains a (numeric) decimal point
    pub has_decimal_point: bool,
    /// `%` present: value is multiplied by 100
    pub is_percent: bool,
    /// `#,##0`: group the whole part in thousands
    pub has_thousands_separator: bool,
    /// Number of trailing commas; each divides the value by 1000
    pub thousands_scale: u8,
    /// `General` keyword: every other token is ignored
    pub is_general: bool,
    /// Scientific notation marker, when present
    pub exponential: Option<Exponent>,
    /// Fraction numerator/denominator, when present
    pub fraction: Option<FractionSpec>,
    /// Section contains date, time, elapsed or AM/PM tokens
    pub is_date: bool,
    /// `AM/PM` present: hours render on a 12-hour clock
    pub has_ampm: bool,
    /// Largest `s.000` precision in the section
    pub subsecond_digits: u8,
    pub color: Option<Color>,
}

impl Section {
    /// A section rendering as General.
    pub fn general() -> Self {
        Section {
            is_general: true,
            ..Section::default()
        }
    }

    pub fn is_fraction(&self) -> bool {
        self.fraction.is_some()
    }

    pub fn is_exponential(&self) -> bool {
        self.exponential.is_some()
    }

    fn all_parts(&self) -> impl Iterator<Item = &FormatPart> {
        self.whole
            .iter()
            .chain(self.fractional.iter())
            .chain(self.exponent.iter())
            .chain(self.fraction.iter().flat_map(|f| f.suffix.iter()))
    }

    /// Returns true if this section contains a text placeholder.
    pub fn has_text_placeholder(&self) -> bool {
        self.all_parts()
            .any(|p| matches!(p, FormatPart::TextPlaceholder))
    }
}

/// A compiled number format code: one to four sections.
///
/// Immutable once built; share it freely or keep it in a
/// [`FormatCache`](crate::cache::FormatCache).
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    source: String,
    sections: Vec<Section>,
}

impl NumberFormat {
    /// Create a NumberFormat from parsed sections.
    /// Keeps at most 4 sections; an empty list becomes a single General section.
    pub fn from_sections(source: impl Into<String>, sections: Vec<Section>) -> Self {
        let mut sections = sections;
        sections.truncate(4);
        if sections.is_empty() {
            sections.push(Section::general());
        }
        NumberFormat {
            source: source.into(),
            sections,
        }
    }

    /// Compile a format code. Never fails.
    pub fn parse(format_code: &str) -> NumberFormat {
        crate::parser::parse(format_code)
    }

    /// The format code this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// True for a lone General section (or an empty format code).
    pub fn is_general(&self) -> bool {
        self.sections.len() == 1 && self.sections[0].is_general
    }

    /// Returns true if this format contains date/time parts.
    pub fn is_date_format(&self) -> bool {
        self.sections.iter().any(|s| s.is_date)
    }

    /// Returns true if this is a single-section text format such as `@`.
    pub fn is_text_format(&self) -> bool {
        self.sections.len() == 1 && self.sections[0].has_text_placeholder()
    }

    pub fn is_percentage(&self) -> bool {
        self.sections.iter().any(|s| s.is_percent)
    }

    pub fn has_color(&self) -> bool {
        self.sections.iter().any(|s| s.color.is_some())
    }
}
