//! Parser for spreadsheet number format codes.
//!
//! Turns the lexer's token stream into [`Section`]s. Parsing is total: any
//! token the grammar does not recognise in its position is kept as literal
//! text, so a strange format code never stops a workbook from rendering.

pub mod lexer;
pub mod tokens;

use crate::ast::{
    AmPmStyle, Color, DatePart, DigitPlaceholder, ElapsedPart, Exponent, FormatPart, FractionDenom,
    FractionSpec, NamedColor, NumberFormat, Section, TimePart,
};
use lexer::Lexer;
use tokens::Token;

/// Compile a format code string into a NumberFormat.
///
/// An empty code is General. More than four sections are truncated.
pub fn parse(format_code: &str) -> NumberFormat {
    if format_code.is_empty() {
        return NumberFormat::from_sections(format_code, vec![Section::general()]);
    }

    let mut sections = Vec::new();
    let mut builder = SectionBuilder::new();
    for spanned in Lexer::new(format_code).tokenize() {
        match spanned.token {
            Token::SectionSep => {
                sections.push(builder.build());
                builder = SectionBuilder::new();
            }
            Token::Eof => {
                sections.push(builder.build());
                break;
            }
            token => builder.push(token),
        }
    }

    if sections.len() > 4 {
        log::debug!(
            "format code {:?} has {} sections, keeping the first 4",
            format_code,
            sections.len()
        );
    }

    NumberFormat::from_sections(format_code, sections)
}

/// Intermediate section token, before the decimal point, exponent, commas and
/// month/minute ambiguities are resolved.
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Part(FormatPart),
    /// Unquoted literal; only these may spell a fixed fraction denominator.
    Bare(char),
    DecimalPoint,
    Comma,
    Slash,
    Percent,
    Exponent(Exponent),
    /// `m` run, month or minute depending on its neighbours
    Month(usize),
}

impl Piece {
    fn is_digit(&self) -> bool {
        matches!(self, Piece::Part(FormatPart::Digit(_)))
    }

    fn is_space(&self) -> bool {
        matches!(self, Piece::Bare(' ') | Piece::Part(FormatPart::Literal(' ')))
    }

    fn is_date_piece(&self) -> bool {
        match self {
            Piece::Month(_) => true,
            Piece::Part(part) => part.is_date_part(),
            _ => false,
        }
    }

    /// Fallback rendering of a piece that carries no structural meaning where it stands.
    fn into_literal(self) -> Vec<FormatPart> {
        match self {
            Piece::Part(part) => vec![part],
            Piece::Bare(ch) => vec![FormatPart::Literal(ch)],
            Piece::DecimalPoint => vec![FormatPart::Literal('.')],
            Piece::Comma => vec![FormatPart::Literal(',')],
            Piece::Slash => vec![FormatPart::Literal('/')],
            Piece::Percent => vec![FormatPart::Literal('%')],
            Piece::Exponent(exp) => vec![
                FormatPart::Literal(if exp.upper { 'E' } else { 'e' }),
                FormatPart::Literal(if exp.show_plus { '+' } else { '-' }),
            ],
            Piece::Month(count) => vec![FormatPart::Date(month_part(count))],
        }
    }
}

/// Helper struct for building sections.
struct SectionBuilder {
    pieces: Vec<Piece>,
    color: Option<Color>,
    is_general: bool,
}

impl SectionBuilder {
    fn new() -> Self {
        Self {
            pieces: Vec::new(),
            color: None,
            is_general: false,
        }
    }

    fn add(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    fn add_part(&mut self, part: FormatPart) {
        self.pieces.push(Piece::Part(part));
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Literal(ch) => self.add(Piece::Bare(ch)),
            Token::EscapedChar(ch) => self.add_part(FormatPart::Literal(ch)),
            Token::QuotedString(s) => {
                for ch in s.chars() {
                    self.add_part(FormatPart::Literal(ch));
                }
            }

            Token::Zero => self.add_part(FormatPart::Digit(DigitPlaceholder::Zero)),
            Token::Hash => self.add_part(FormatPart::Digit(DigitPlaceholder::Hash)),
            Token::Question => self.add_part(FormatPart::Digit(DigitPlaceholder::Question)),

            Token::DecimalPoint => self.add(Piece::DecimalPoint),
            Token::Comma => self.add(Piece::Comma),
            Token::Slash => self.add(Piece::Slash),
            Token::Percent => self.add(Piece::Percent),
            Token::At => self.add_part(FormatPart::TextPlaceholder),

            // Width reservation and fill are layout concerns; no text is produced
            Token::Fill(_) | Token::Skip(_) => {}

            Token::Exponent { upper, show_plus } => {
                self.add(Piece::Exponent(Exponent { upper, show_plus }))
            }

            Token::Year(count) => self.add_part(FormatPart::Date(if count >= 3 {
                DatePart::Year4
            } else {
                DatePart::Year2
            })),
            Token::Month(count) => self.add(Piece::Month(count)),
            Token::Day(count) => self.add_part(FormatPart::Date(match count {
                1 => DatePart::Day,
                2 => DatePart::Day2,
                3 => DatePart::DayAbbr,
                _ => DatePart::DayFull,
            })),
            Token::Hour(count) => self.add_part(FormatPart::Time(if count >= 2 {
                TimePart::Hour2
            } else {
                TimePart::Hour
            })),
            Token::Second(count) => self.add_part(FormatPart::Time(if count >= 2 {
                TimePart::Second2
            } else {
                TimePart::Second
            })),

            Token::AmPm(s) => self.add_part(FormatPart::AmPm(parse_am_pm_style(&s))),
            Token::Bracket(content) => self.push_bracket(&content),
            Token::General => self.is_general = true,

            Token::SectionSep | Token::Eof => {}
        }
    }

    /// Classify bracket content: [Red], [>100], [h], [$-409], etc.
    fn push_bracket(&mut self, content: &str) {
        let content = content.trim();

        if let Some(color) = try_parse_color(content) {
            self.color = Some(color);
            return;
        }

        // Conditions are recognised but do not take part in section selection
        if is_condition(content) {
            return;
        }

        if let Some(elapsed) = try_parse_elapsed(content) {
            self.add_part(FormatPart::Elapsed(elapsed));
            return;
        }

        if let Some(currency) = try_parse_currency(content) {
            if !currency.is_empty() {
                self.add_part(FormatPart::Currency(currency));
            }
            return;
        }

        log::debug!("ignoring unknown bracket content [{content}]");
    }

    fn build(self) -> Section {
        let SectionBuilder {
            pieces,
            color,
            is_general,
        } = self;

        if is_general {
            return Section {
                color,
                ..Section::general()
            };
        }

        let mut section = if pieces.iter().any(Piece::is_date_piece) {
            build_date_section(pieces)
        } else if let Some(slash) = find_fraction_slash(&pieces) {
            build_fraction_section(pieces, slash)
        } else {
            build_number_section(pieces)
        };
        section.color = color;
        section
    }
}

fn month_part(count: usize) -> DatePart {
    match count {
        1 => DatePart::Month,
        2 => DatePart::Month2,
        3 => DatePart::MonthAbbr,
        4 => DatePart::MonthFull,
        _ => DatePart::MonthLetter,
    }
}

fn is_hour_like(piece: &Piece) -> bool {
    matches!(
        piece,
        Piece::Part(FormatPart::Time(TimePart::Hour | TimePart::Hour2))
            | Piece::Part(FormatPart::Elapsed(ElapsedPart::Hours | ElapsedPart::Hours2))
    )
}

fn is_second_like(piece: &Piece) -> bool {
    matches!(
        piece,
        Piece::Part(FormatPart::Time(TimePart::Second | TimePart::Second2))
            | Piece::Part(FormatPart::Elapsed(ElapsedPart::Seconds | ElapsedPart::Seconds2))
    )
}

/// `m`/`mm` is a minute when the nearest date token before it is an hour or
/// the nearest date token after it is a second.
fn is_minute(pieces: &[Piece], index: usize) -> bool {
    let before = pieces[..index].iter().rev().find(|p| p.is_date_piece());
    let after = pieces[index + 1..].iter().find(|p| p.is_date_piece());
    before.is_some_and(is_hour_like) || after.is_some_and(is_second_like)
}

fn build_date_section(pieces: Vec<Piece>) -> Section {
    let mut section = Section {
        is_date: true,
        ..Section::default()
    };

    let mut index = 0;
    while index < pieces.len() {
        let piece = &pieces[index];
        index += 1;
        match piece {
            Piece::Month(count) if *count <= 2 && is_minute(&pieces, index - 1) => {
                section.whole.push(FormatPart::Time(if *count == 2 {
                    TimePart::Minute2
                } else {
                    TimePart::Minute
                }));
            }
            Piece::DecimalPoint
                if index >= 2
                    && is_second_like(&pieces[index - 2])
                    && pieces
                        .get(index)
                        .is_some_and(|p| *p == Piece::Part(FormatPart::Digit(DigitPlaceholder::Zero))) =>
            {
                let mut digits = 0u8;
                while index < pieces.len()
                    && pieces[index] == Piece::Part(FormatPart::Digit(DigitPlaceholder::Zero))
                    && digits < 3
                {
                    digits += 1;
                    index += 1;
                }
                section.subsecond_digits = section.subsecond_digits.max(digits);
                section.whole.push(FormatPart::Time(TimePart::SubSecond(digits)));
            }
            Piece::Part(FormatPart::AmPm(style)) => {
                section.has_ampm = true;
                section.whole.push(FormatPart::AmPm(*style));
            }
            Piece::Part(FormatPart::Digit(placeholder)) => {
                section.whole.push(FormatPart::Literal(match placeholder {
                    DigitPlaceholder::Zero => '0',
                    DigitPlaceholder::Hash => '#',
                    DigitPlaceholder::Question => '?',
                }));
            }
            other => section.whole.extend(other.clone().into_literal()),
        }
    }

    section
}

/// Finds a `/` with digit placeholders before it and either placeholders or a
/// bare number after it, allowing spaces on both sides of the slash.
fn find_fraction_slash(pieces: &[Piece]) -> Option<usize> {
    let slash = pieces.iter().position(|p| *p == Piece::Slash)?;

    let has_numerator = pieces[..slash]
        .iter()
        .rev()
        .find(|p| !p.is_space())
        .is_some_and(Piece::is_digit);
    let has_denominator = pieces[slash + 1..]
        .iter()
        .find(|p| !p.is_space())
        .is_some_and(|p| p.is_digit() || matches!(p, Piece::Bare('1'..='9')));

    (has_numerator && has_denominator).then_some(slash)
}

fn build_fraction_section(pieces: Vec<Piece>, slash: usize) -> Section {
    let mut section = Section::default();

    // Numerator: the placeholder run nearest the slash
    let mut numerator_end = slash;
    while numerator_end > 0 && pieces[numerator_end - 1].is_space() {
        numerator_end -= 1;
    }
    let mut numerator_start = numerator_end;
    while numerator_start > 0 && pieces[numerator_start - 1].is_digit() {
        numerator_start -= 1;
    }
    let numerator = placeholders(&pieces[numerator_start..numerator_end]);

    // Denominator: a placeholder run, or a literal number
    let mut denom_start = slash + 1;
    while denom_start < pieces.len() && pieces[denom_start].is_space() {
        denom_start += 1;
    }
    let mut denom_end = denom_start;
    let mut denominator_digits = Vec::new();
    let denominator = if pieces[denom_start].is_digit() {
        while denom_end < pieces.len() && pieces[denom_end].is_digit() {
            denom_end += 1;
        }
        denominator_digits = placeholders(&pieces[denom_start..denom_end]);
        FractionDenom::UpToDigits(denominator_digits.len().min(9) as u8)
    } else {
        let mut number = String::new();
        while denom_end < pieces.len() {
            match &pieces[denom_end] {
                Piece::Bare(ch @ '0'..='9') => number.push(*ch),
                Piece::Part(FormatPart::Digit(DigitPlaceholder::Zero)) => number.push('0'),
                _ => break,
            }
            denom_end += 1;
        }
        match number.parse::<u32>() {
            Ok(value) if value > 0 => FractionDenom::Fixed(value),
            _ => {
                log::debug!("fraction denominator {number:?} out of range, using one digit");
                denominator_digits = vec![DigitPlaceholder::Question];
                FractionDenom::UpToDigits(1)
            }
        }
    };

    let mut pieces = pieces;
    let tail: Vec<Piece> = pieces.split_off(denom_end);
    pieces.truncate(numerator_start);

    let whole_len = pieces.len();
    let (resolved, _) = resolve_commas(pieces, whole_len, &mut section);
    let whole = to_parts(resolved, &mut section);
    let suffix = to_parts(tail, &mut section);

    section.whole = whole;
    section.fraction = Some(FractionSpec {
        numerator,
        denominator,
        denominator_digits,
        suffix,
    });
    section
}

fn placeholders(pieces: &[Piece]) -> Vec<DigitPlaceholder> {
    pieces
        .iter()
        .filter_map(|p| match p {
            Piece::Part(FormatPart::Digit(placeholder)) => Some(*placeholder),
            _ => None,
        })
        .collect()
}

/// Flatten leftover pieces into parts, noting any percent sign.
fn to_parts(pieces: Vec<Piece>, section: &mut Section) -> Vec<FormatPart> {
    let mut parts = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if piece == Piece::Percent {
            section.is_percent = true;
        }
        parts.extend(piece.into_literal());
    }
    parts
}

fn build_number_section(pieces: Vec<Piece>) -> Section {
    let mut section = Section::default();

    let mut mantissa = pieces;
    let mut exponent = Vec::new();
    if let Some(index) = mantissa.iter().position(|p| matches!(p, Piece::Exponent(_))) {
        exponent = mantissa.split_off(index + 1);
        if let Some(Piece::Exponent(exp)) = mantissa.pop() {
            section.exponential = Some(exp);
        }
    }

    let mut fractional = Vec::new();
    if let Some(index) = mantissa.iter().position(|p| *p == Piece::DecimalPoint) {
        section.has_decimal_point = true;
        fractional = mantissa.split_off(index + 1);
        mantissa.pop();
    }

    // Commas are resolved across the whole mantissa so that a trailing run
    // is recognised even when it follows the fractional digits.
    let whole_len = mantissa.len();
    mantissa.extend(fractional);
    let (mut resolved, boundary) = resolve_commas(mantissa, whole_len, &mut section);
    let fractional = resolved.split_off(boundary);

    let whole = to_parts(resolved, &mut section);
    let fractional = to_parts(fractional, &mut section);
    let exponent = to_parts(exponent, &mut section);
    section.whole = whole;
    section.fractional = fractional;
    section.exponent = exponent;

    section
}

/// Decide what each comma means:
/// - between digit placeholders of the whole part: thousands grouping
/// - after the last placeholder and followed only by more commas, then
///   section end or `%`: divide by 1000
/// - anywhere else: a literal comma
///
/// Returns the remaining pieces and the new whole/fractional boundary.
fn resolve_commas(
    pieces: Vec<Piece>,
    whole_len: usize,
    section: &mut Section,
) -> (Vec<Piece>, usize) {
    let mut out = Vec::with_capacity(pieces.len());
    let mut boundary = whole_len;

    for (index, piece) in pieces.iter().enumerate() {
        if *piece != Piece::Comma {
            out.push(piece.clone());
            continue;
        }

        let digit_before = pieces[..index].iter().any(Piece::is_digit);
        let digit_after_in_whole =
            index < whole_len && pieces[index + 1..whole_len].iter().any(Piece::is_digit);
        let digit_after = pieces[index + 1..].iter().any(Piece::is_digit);
        let next_non_comma = pieces[index + 1..].iter().find(|p| **p != Piece::Comma);

        if digit_before && digit_after_in_whole {
            section.has_thousands_separator = true;
        } else if digit_before
            && !digit_after
            && matches!(next_non_comma, None | Some(Piece::Percent))
        {
            section.thousands_scale = section.thousands_scale.saturating_add(1);
        } else {
            out.push(Piece::Bare(','));
            continue;
        }

        if index < whole_len {
            boundary -= 1;
        }
    }

    (out, boundary)
}

/// Parse AM/PM style from the matched string.
fn parse_am_pm_style(s: &str) -> AmPmStyle {
    match s {
        "am/pm" => AmPmStyle::Lower,
        "a/p" => AmPmStyle::ShortLower,
        _ if s.len() == 3 => {
            if s.starts_with('a') {
                AmPmStyle::ShortLower
            } else {
                AmPmStyle::ShortUpper
            }
        }
        _ => {
            if s.starts_with('a') {
                AmPmStyle::Lower
            } else {
                AmPmStyle::Upper
            }
        }
    }
}

/// Try to parse bracket content as a color.
fn try_parse_color(content: &str) -> Option<Color> {
    if let Ok(named) = content.parse::<NamedColor>() {
        return Some(Color::Named(named));
    }

    // Indexed colors: Color1 through Color56
    let prefix = content.get(..5)?;
    if prefix.eq_ignore_ascii_case("color") {
        if let Ok(index) = content[5..].parse::<u8>() {
            if (1..=56).contains(&index) {
                return Some(Color::Indexed(index));
            }
        }
    }

    None
}

/// Returns true for `[>100]`, `[<=0]`, `[<>5]` and the like.
fn is_condition(content: &str) -> bool {
    let value = ["<>", ">=", "<=", ">", "<", "="]
        .iter()
        .find_map(|op| content.strip_prefix(op));
    value.is_some_and(|v| v.trim().parse::<f64>().is_ok())
}

/// Try to parse bracket content as elapsed time.
fn try_parse_elapsed(content: &str) -> Option<ElapsedPart> {
    match content.to_ascii_lowercase().as_str() {
        "h" => Some(ElapsedPart::Hours),
        "hh" => Some(ElapsedPart::Hours2),
        "m" => Some(ElapsedPart::Minutes),
        "mm" => Some(ElapsedPart::Minutes2),
        "s" => Some(ElapsedPart::Seconds),
        "ss" => Some(ElapsedPart::Seconds2),
        _ => None,
    }
}

/// Try to parse bracket content as a currency/locale code and return its symbol.
///
/// `[$€-407]` yields `€`, `[$-409]` yields an empty symbol.
fn try_parse_currency(content: &str) -> Option<String> {
    let rest = content.strip_prefix('$')?;
    let symbol = match rest.find('-') {
        Some(dash) => &rest[..dash],
        None => rest,
    };
    Some(symbol.to_string())
}
