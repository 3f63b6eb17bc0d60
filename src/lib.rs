//! cellfmt - spreadsheet number format codes
//!
//! Compiles the format codes attached to spreadsheet cells (`#,##0.00`,
//! `m/d/yy h:mm`, `# ?/?`, ...) and renders numbers, dates and text the way a
//! spreadsheet displays them.
//!
//! ```
//! use cellfmt::{compile_format, render_value, FormatOptions};
//!
//! let opts = FormatOptions::default();
//! let model = compile_format("#,##0 ;(#,##0)");
//! assert_eq!(render_value(1234.0, &model, &opts), "1,234 ");
//! assert_eq!(render_value(-1234.0, &model, &opts), "(1,234)");
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod value;

pub mod date_serial;

mod builtin_formats;
pub mod cache;
pub mod formatter;
mod locale;
mod numeric;
pub mod parser;

use std::sync::Arc;

pub use ast::{NumberFormat, Section};
pub use builtin_formats::{format_code_from_id, is_builtin_format_id};
pub use cache::FormatCache;
pub use error::FormatError;
pub use locale::Locale;
pub use numeric::is_number;
pub use options::{DateSystem, FormatOptions};
pub use value::Value;

/// Compile a format code, reusing an earlier compilation of the same code.
///
/// Never fails: unrecognised fragments are kept as literal text.
pub fn compile_format(format_code: &str) -> Arc<NumberFormat> {
    cache::get_or_parse(format_code)
}

/// Render a cell value with a compiled format.
///
/// Date serials are read in `opts.date_system`.
pub fn render_value<'a>(
    value: impl Into<Value<'a>>,
    model: &NumberFormat,
    opts: &FormatOptions,
) -> String {
    model.format_value(&value.into(), opts)
}

/// Format a number with a format code.
///
/// # Example
///
/// ```
/// use cellfmt::{format, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format(0.25, "0%", &opts).unwrap(), "25%");
/// ```
pub fn format(value: f64, format_code: &str, opts: &FormatOptions) -> Result<String, FormatError> {
    compile_format(format_code).try_format(value, opts)
}

/// Format a number with default options, falling back to General on error.
pub fn format_default(value: f64, format_code: &str) -> String {
    compile_format(format_code).format(value, &FormatOptions::default())
}

/// Format a number with a built-in format id.
///
/// Unknown ids render as General.
pub fn format_with_id(value: f64, id: u32, opts: &FormatOptions) -> Result<String, FormatError> {
    match format_code_from_id(id) {
        Some(code) => format(value, code, opts),
        None => {
            log::debug!("numFmtId {id} is not built in; using General");
            format(value, "General", opts)
        }
    }
}

/// Format a number with a built-in format id and default options.
pub fn format_with_id_default(value: f64, id: u32) -> String {
    let code = format_code_from_id(id).unwrap_or("General");
    format_default(value, code)
}
