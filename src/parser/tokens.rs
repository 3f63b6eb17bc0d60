//! Token types for the format code lexer.

/// A token in a format code string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Digit placeholders
    Zero,     // 0
    Hash,     // #
    Question, // ?

    // Separators
    DecimalPoint, // .
    Comma,        // ,
    SectionSep,   // ;
    Slash,        // /

    // Special characters
    Percent,    // %
    At,         // @
    Fill(char), // *x
    Skip(char), // _x

    /// `E+`, `E-`, `e+`, `e-`
    Exponent { upper: bool, show_plus: bool },

    // Date/time letter runs, with their length
    Year(usize),   // y
    Month(usize),  // m
    Day(usize),    // d
    Hour(usize),   // h
    Second(usize), // s

    /// `[...]` with the brackets stripped
    Bracket(String),

    /// AM/PM, am/pm, A/P, a/p as written
    AmPm(String),

    /// `General` keyword (any case)
    General,

    // End of input
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
