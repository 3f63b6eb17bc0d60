//! Numeric literal classification.
//!
//! Decides whether a stored cell string is a plain decimal literal that
//! should be rendered through the number path:
//!
//! ```text
//! [+|-] digit+ [. digit+] [E (+|-) digit+]
//! [+|-] digit* . digit+   [E (+|-) digit+]
//! ```
//!
//! The exponent marker is case-insensitive but its sign is mandatory.

/// Scanner states. Accepting states are `Integer`, `Fraction` and `ExponentDigits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Sign,
    Integer,
    Point,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
}

impl State {
    fn next(self, b: u8) -> Option<State> {
        use State::*;
        match (self, b) {
            (Start, b'+' | b'-') => Some(Sign),
            (Start | Sign | Integer, b'0'..=b'9') => Some(Integer),
            (Start | Sign | Integer, b'.') => Some(Point),
            (Point | Fraction, b'0'..=b'9') => Some(Fraction),
            (Integer | Fraction, b'e' | b'E') => Some(Exponent),
            (Exponent, b'+' | b'-') => Some(ExponentSign),
            (ExponentSign | ExponentDigits, b'0'..=b'9') => Some(ExponentDigits),
            _ => None,
        }
    }

    fn is_accepting(self) -> bool {
        matches!(self, State::Integer | State::Fraction | State::ExponentDigits)
    }
}

/// Returns true if `s` is a numeric literal.
///
/// Single left-to-right pass, no backtracking.
///
/// # Examples
/// ```
/// use cellfmt::is_number;
///
/// assert!(is_number("1.23E+10"));
/// assert!(is_number(".5"));
/// assert!(!is_number("1.23E10"));
/// assert!(!is_number("1."));
/// ```
pub fn is_number(s: &str) -> bool {
    let mut state = State::Start;
    for &b in s.as_bytes() {
        match state.next(b) {
            Some(next) => state = next,
            None => return false,
        }
    }
    state.is_accepting()
}
