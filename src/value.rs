//! Cell values a format can render.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::date_serial::{date_to_serial, datetime_to_serial, time_to_serial};
use crate::options::DateSystem;

/// A cell value.
///
/// Numbers and dates share one representation in a spreadsheet, so chrono
/// values are turned into serial numbers before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A number, possibly a date serial
    Number(f64),
    Text(&'a str),
    Bool(bool),
    /// An empty cell
    Empty,
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<'a> From<NaiveDateTime> for Value<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<'a> From<NaiveDate> for Value<'a> {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<'a> From<NaiveTime> for Value<'a> {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl<'a> Value<'a> {
    /// Returns the value as a number if it is one. Dates need a date system,
    /// see [`Value::to_serial`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The serial number of a number or chrono value in the given date system.
    ///
    /// Dates before the epoch have no serial and return `None`.
    pub fn to_serial(&self, system: DateSystem) -> Option<f64> {
        use chrono::Datelike;

        match self {
            Value::Number(n) => Some(*n),
            Value::DateTime(dt) => datetime_to_serial(*dt, system),
            Value::Date(d) => date_to_serial(d.year(), d.month(), d.day(), system),
            Value::Time(t) => Some(time_to_serial(*t)),
            _ => None,
        }
    }

    /// Returns the value as text if it is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns a type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Empty => "empty",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
        }
    }
}
