//! Error types for formatting.
//!
//! Parsing a format code never fails: malformed fragments degrade to literal
//! text. Only rendering has a fallible path.

use thiserror::Error;

/// Errors that can occur when formatting a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("value is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("date out of range: serial number {serial}")]
    DateOutOfRange { serial: f64 },
}
