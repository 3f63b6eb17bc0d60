//! Names and separators used when rendering.

mod builtin;

pub use builtin::Locale;
