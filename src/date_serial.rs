//! Date serial number conversion utilities
//!
//! Spreadsheets store dates as a count of days since an epoch, with the time
//! of day as the fractional part (0.5 is noon, 0.75 is 18:00).
//!
//! - 1900 system: serial 1 is 1900-01-01 and serial 0 is the fictitious
//!   1900-01-00. 1900 is treated as a leap year, so serial 60 is the
//!   nonexistent 1900-02-29 and every later serial is one day ahead of the
//!   real calendar.
//! - 1904 system: serial 0 is 1904-01-01, with no phantom day.
//!
//! Calendar arithmetic is delegated to chrono; only the 1900 quirks are
//! handled here.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::options::DateSystem;

/// Largest serial that still maps to a date (9999-12-31 in the 1900 system).
pub const MAX_SERIAL: f64 = 2_958_465.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// The serial of the phantom 1900-02-29.
const PHANTOM_LEAP_DAY: i64 = 60;

fn epoch(system: DateSystem) -> Option<NaiveDate> {
    match system {
        // Serial 1 lands on 1900-01-01
        DateSystem::Date1900 => NaiveDate::from_ymd_opt(1899, 12, 31),
        DateSystem::Date1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
    }
}

/// Calendar and clock fields of a serial, rounded to the precision the
/// format displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Fraction of a second in units of `10^-subsecond_digits`.
    pub subsecond: u32,
    pub subsecond_digits: u8,
    /// Whole seconds since serial 0, for `[h]`, `[m]` and `[s]`.
    pub total_seconds: i64,
}

fn date_from_days(days: i64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if days < 0 {
        return None;
    }
    if system == DateSystem::Date1900 {
        if days == 0 {
            return Some((1900, 1, 0));
        }
        if days == PHANTOM_LEAP_DAY {
            return Some((1900, 2, 29));
        }
    }

    let offset = if system == DateSystem::Date1900 && days > PHANTOM_LEAP_DAY {
        days - 1
    } else {
        days
    };
    let date = epoch(system)?.checked_add_days(Days::new(u64::try_from(offset).ok()?))?;
    Some((date.year(), date.month(), date.day()))
}

fn weekday_from_days(days: i64, system: DateSystem) -> u32 {
    match system {
        // Serial 0 is a Saturday; the phantom leap day keeps the cycle unbroken
        DateSystem::Date1900 => ((days + 6).rem_euclid(7)) as u32,
        // 1904-01-01 was a Friday
        DateSystem::Date1904 => ((days + 5).rem_euclid(7)) as u32,
    }
}

/// Convert a serial number to a date (year, month, day).
///
/// Returns `None` for negative serials or serials past [`MAX_SERIAL`]. In the
/// 1900 system serial 0 gives `(1900, 1, 0)` and serial 60 gives
/// `(1900, 2, 29)`, the dates a spreadsheet displays for them.
pub fn serial_to_date(serial: f64, system: DateSystem) -> Option<(i32, u32, u32)> {
    if !serial.is_finite() || serial < 0.0 || serial >= MAX_SERIAL + 1.0 {
        return None;
    }
    date_from_days(serial.floor() as i64, system)
}

/// Extract (hours, minutes, seconds) from the fractional part of a serial,
/// rounded to the nearest second.
pub fn serial_to_time(serial: f64) -> (u32, u32, u32) {
    let seconds = (serial.fract().abs() * SECONDS_PER_DAY as f64).round() as i64;
    let seconds = seconds.min(SECONDS_PER_DAY - 1) as u32;
    (seconds / 3600, seconds % 3600 / 60, seconds % 60)
}

/// Day of the week: 1 = Sunday through 7 = Saturday.
pub fn serial_to_weekday(serial: f64, system: DateSystem) -> u32 {
    weekday_from_days(serial.floor() as i64, system) + 1
}

/// Break a serial into calendar and clock fields.
///
/// The serial is rounded once, to `subsecond_digits` decimal places of a
/// second, before any field is extracted, so 23:59:59.6 shown without
/// fractions rolls over into the next day.
pub fn serial_to_timestamp(
    serial: f64,
    system: DateSystem,
    subsecond_digits: u8,
) -> Option<Timestamp> {
    if !serial.is_finite() || serial < 0.0 || serial >= MAX_SERIAL + 1.0 {
        return None;
    }

    let digits = subsecond_digits.min(3);
    let scale = 10i64.pow(u32::from(digits));
    let ticks_per_day = SECONDS_PER_DAY * scale;
    let ticks = (serial * ticks_per_day as f64).round() as i64;

    let days = ticks / ticks_per_day;
    let ticks_of_day = ticks % ticks_per_day;
    let seconds_of_day = (ticks_of_day / scale) as u32;

    let (year, month, day) = date_from_days(days, system)?;

    Some(Timestamp {
        year,
        month,
        day,
        weekday: weekday_from_days(days, system),
        hour: seconds_of_day / 3600,
        minute: seconds_of_day % 3600 / 60,
        second: seconds_of_day % 60,
        subsecond: (ticks_of_day % scale) as u32,
        subsecond_digits: digits,
        total_seconds: ticks / scale,
    })
}

/// Convert a calendar date to a serial number.
///
/// Returns `None` for dates that do not exist, other than 1900-02-29 in the
/// 1900 system, and for dates before the epoch.
pub fn date_to_serial(year: i32, month: u32, day: u32, system: DateSystem) -> Option<f64> {
    if system == DateSystem::Date1900 && (year, month, day) == (1900, 2, 29) {
        return Some(PHANTOM_LEAP_DAY as f64);
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let days = date.signed_duration_since(epoch(system)?).num_days();
    if days < 0 {
        return None;
    }

    let days = if system == DateSystem::Date1900 && days >= PHANTOM_LEAP_DAY {
        days + 1
    } else {
        days
    };
    Some(days as f64)
}

/// Fraction of a day elapsed at `time`.
pub fn time_to_serial(time: NaiveTime) -> f64 {
    let seconds = f64::from(time.num_seconds_from_midnight());
    let nanos = f64::from(time.nanosecond().min(999_999_999));
    (seconds + nanos / 1e9) / SECONDS_PER_DAY as f64
}

/// Serial number of a date and time.
pub fn datetime_to_serial(datetime: NaiveDateTime, system: DateSystem) -> Option<f64> {
    let date = datetime.date();
    let days = date_to_serial(date.year(), date.month(), date.day(), system)?;
    Some(days + time_to_serial(datetime.time()))
}
