//! Lexer for tokenizing format code strings.
//!
//! A hand-written scanner with maximal munch on the known vocabularies:
//! - Date/time letters (y, m, d, h, s) are returned as runs with their length
//! - Quoted strings ("text") become QuotedString tokens
//! - Escaped characters (\$) become EscapedChar tokens
//! - `_x` and `*x` swallow the following character
//! - Bracket content is returned whole for the parser to classify
//! - AM/PM patterns and the `General` keyword are single tokens
//!
//! The lexer never fails. Dangling or unterminated constructs degrade to
//! literal text.

use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for format code strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        };

        let token = match ch {
            '"' => self.lex_quoted_string(),
            '\\' => self.lex_escaped_char(),
            '[' => self.lex_bracket(),

            '0' => self.single(Token::Zero),
            '#' => self.single(Token::Hash),
            '?' => self.single(Token::Question),
            '.' => self.single(Token::DecimalPoint),
            ',' => self.single(Token::Comma),
            ';' => self.single(Token::SectionSep),
            '/' => self.single(Token::Slash),
            '%' => self.single(Token::Percent),
            '@' => self.single(Token::At),

            '_' | '*' => {
                self.advance();
                match self.current_char() {
                    Some(next) => {
                        self.advance();
                        if ch == '_' {
                            Token::Skip(next)
                        } else {
                            Token::Fill(next)
                        }
                    }
                    None => {
                        log::debug!("dangling '{ch}' at end of format code {:?}", self.input);
                        Token::Skip(' ')
                    }
                }
            }

            'E' | 'e' => match self.peek_char(1) {
                Some(sign @ ('+' | '-')) => {
                    self.advance();
                    self.advance();
                    Token::Exponent {
                        upper: ch == 'E',
                        show_plus: sign == '+',
                    }
                }
                _ => self.single(Token::Literal(ch)),
            },

            'G' | 'g' if self.try_match_general() => Token::General,
            'A' | 'a' => match self.try_match_am_pm() {
                Some(matched) => Token::AmPm(matched),
                None => self.single(Token::Literal(ch)),
            },

            'y' | 'Y' => Token::Year(self.count_run(ch)),
            'm' | 'M' => Token::Month(self.count_run(ch)),
            'd' | 'D' => Token::Day(self.count_run(ch)),
            'h' | 'H' => Token::Hour(self.count_run(ch)),
            's' | 'S' => Token::Second(self.count_run(ch)),

            // Everything else is a literal
            _ => self.single(Token::Literal(ch)),
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }

    /// Returns the remaining input as a string slice.
    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Counts and consumes consecutive occurrences of `ch`, ignoring ASCII case.
    fn count_run(&mut self, ch: char) -> usize {
        let mut count = 0;
        while let Some(next) = self.current_char() {
            if !next.eq_ignore_ascii_case(&ch) {
                break;
            }
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes a quoted string ("..."). An unterminated string runs to the end of input.
    fn lex_quoted_string(&mut self) -> Token {
        self.advance(); // Skip the opening quote
        let rest = self.remaining();
        match rest.find('"') {
            Some(close) => {
                self.position += close + 1;
                Token::QuotedString(rest[..close].to_string())
            }
            None => {
                log::debug!("unterminated quote in format code {:?}", self.input);
                self.position = self.input.len();
                Token::QuotedString(rest.to_string())
            }
        }
    }

    /// Lexes an escaped character (\x). A trailing backslash is kept as a literal.
    fn lex_escaped_char(&mut self) -> Token {
        self.advance(); // Skip the backslash
        match self.current_char() {
            Some(ch) => {
                self.advance();
                Token::EscapedChar(ch)
            }
            None => {
                log::debug!("dangling escape in format code {:?}", self.input);
                Token::Literal('\\')
            }
        }
    }

    /// Lexes `[...]`. Without a closing bracket the `[` is a plain literal.
    fn lex_bracket(&mut self) -> Token {
        self.advance(); // Skip the opening bracket
        let rest = self.remaining();
        match rest.find(']') {
            Some(close) => {
                self.position += close + 1;
                Token::Bracket(rest[..close].to_string())
            }
            None => {
                log::debug!("unterminated bracket in format code {:?}", self.input);
                Token::Literal('[')
            }
        }
    }

    /// Tries to match the `General` keyword at the current position.
    fn try_match_general(&mut self) -> bool {
        match self.remaining().get(..7) {
            Some(prefix) if prefix.eq_ignore_ascii_case("General") => {
                self.position += 7;
                true
            }
            _ => false,
        }
    }

    /// Tries to match an AM/PM pattern at the current position, longest first.
    fn try_match_am_pm(&mut self) -> Option<String> {
        let remaining = self.remaining();
        for pattern in ["AM/PM", "A/P"] {
            if let Some(prefix) = remaining.get(..pattern.len()) {
                if prefix.eq_ignore_ascii_case(pattern) {
                    self.position += pattern.len();
                    return Some(prefix.to_string());
                }
            }
        }
        None
    }

    /// Returns all remaining tokens, ending with `Eof`.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
