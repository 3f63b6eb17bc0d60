//! Date and time formatting

use crate::ast::{AmPmStyle, DatePart, ElapsedPart, FormatPart, Section, TimePart};
use crate::date_serial::{serial_to_timestamp, Timestamp};
use crate::error::FormatError;
use crate::options::FormatOptions;

/// Format a serial number with a date/time section.
///
/// Fails for negative serials and serials past 9999-12-31.
pub fn format_date(
    value: f64,
    section: &Section,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let ts = serial_to_timestamp(value, opts.date_system, section.subsecond_digits)
        .ok_or(FormatError::DateOutOfRange { serial: value })?;

    let mut result = String::new();
    for part in &section.whole {
        match part {
            FormatPart::Date(date_part) => format_date_part(&mut result, *date_part, &ts, opts),
            FormatPart::Time(time_part) => {
                format_time_part(&mut result, *time_part, &ts, section.has_ampm, opts)
            }
            FormatPart::Elapsed(elapsed) => format_elapsed(&mut result, *elapsed, &ts),
            FormatPart::AmPm(style) => result.push_str(am_pm(*style, ts.hour, opts)),
            FormatPart::Literal(ch) => result.push(*ch),
            FormatPart::Currency(symbol) => result.push_str(symbol),
            FormatPart::Digit(_) | FormatPart::TextPlaceholder => {}
        }
    }

    Ok(result)
}

fn format_date_part(out: &mut String, part: DatePart, ts: &Timestamp, opts: &FormatOptions) {
    let locale = &opts.locale;
    match part {
        DatePart::Year2 => out.push_str(&format!("{:02}", ts.year.rem_euclid(100))),
        DatePart::Year4 => out.push_str(&format!("{:04}", ts.year)),
        DatePart::Month => out.push_str(&ts.month.to_string()),
        DatePart::Month2 => out.push_str(&format!("{:02}", ts.month)),
        DatePart::MonthAbbr => out.push_str(locale.month_abbr(ts.month)),
        DatePart::MonthFull => out.push_str(locale.month_full(ts.month)),
        DatePart::MonthLetter => out.push_str(locale.month_letter(ts.month)),
        DatePart::Day => out.push_str(&ts.day.to_string()),
        DatePart::Day2 => out.push_str(&format!("{:02}", ts.day)),
        DatePart::DayAbbr => out.push_str(locale.day_abbr(ts.weekday)),
        DatePart::DayFull => out.push_str(locale.day_full(ts.weekday)),
    }
}

fn format_time_part(
    out: &mut String,
    part: TimePart,
    ts: &Timestamp,
    twelve_hour: bool,
    opts: &FormatOptions,
) {
    let hour = if twelve_hour {
        match ts.hour % 12 {
            0 => 12,
            h => h,
        }
    } else {
        ts.hour
    };

    match part {
        TimePart::Hour => out.push_str(&hour.to_string()),
        TimePart::Hour2 => out.push_str(&format!("{hour:02}")),
        TimePart::Minute => out.push_str(&ts.minute.to_string()),
        TimePart::Minute2 => out.push_str(&format!("{:02}", ts.minute)),
        TimePart::Second => out.push_str(&ts.second.to_string()),
        TimePart::Second2 => out.push_str(&format!("{:02}", ts.second)),
        TimePart::SubSecond(digits) => {
            // The timestamp carries the section's highest precision
            let all = format!(
                "{:0width$}",
                ts.subsecond,
                width = ts.subsecond_digits as usize
            );
            out.push(opts.locale.decimal_separator);
            out.push_str(all.get(..digits as usize).unwrap_or(&all));
        }
    }
}

fn format_elapsed(out: &mut String, part: ElapsedPart, ts: &Timestamp) {
    let total = ts.total_seconds;
    match part {
        ElapsedPart::Hours => out.push_str(&(total / 3600).to_string()),
        ElapsedPart::Hours2 => out.push_str(&format!("{:02}", total / 3600)),
        ElapsedPart::Minutes => out.push_str(&(total / 60).to_string()),
        ElapsedPart::Minutes2 => out.push_str(&format!("{:02}", total / 60)),
        ElapsedPart::Seconds => out.push_str(&total.to_string()),
        ElapsedPart::Seconds2 => out.push_str(&format!("{total:02}")),
    }
}

fn am_pm(style: AmPmStyle, hour: u32, opts: &FormatOptions) -> &'static str {
    let pm = hour >= 12;
    match (style, pm) {
        (AmPmStyle::Upper, false) => opts.locale.am_string,
        (AmPmStyle::Upper, true) => opts.locale.pm_string,
        (AmPmStyle::Lower, false) => "am",
        (AmPmStyle::Lower, true) => "pm",
        (AmPmStyle::ShortUpper, false) => "A",
        (AmPmStyle::ShortUpper, true) => "P",
        (AmPmStyle::ShortLower, false) => "a",
        (AmPmStyle::ShortLower, true) => "p",
    }
}
