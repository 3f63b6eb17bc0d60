//! Built-in locale data.

const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Separators and calendar names.
///
/// Only US English ships with the crate. Format codes never switch locale;
/// the `-409` in `[$-409]` is read and ignored.
#[derive(Debug, Clone)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// January first
    pub month_names_full: [&'static str; 12],
    /// Sunday first
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "AM",
            pm_string: "PM",
            month_names_full: MONTHS_FULL,
            day_names_full: DAYS_FULL,
        }
    }

    /// Full month name for a 1-based month.
    pub fn month_full(&self, month: u32) -> &'static str {
        self.month_names_full[(month.clamp(1, 12) - 1) as usize]
    }

    /// First three letters of the month name.
    pub fn month_abbr(&self, month: u32) -> &'static str {
        let full = self.month_full(month);
        full.get(..3).unwrap_or(full)
    }

    /// First letter of the month name.
    pub fn month_letter(&self, month: u32) -> &'static str {
        let full = self.month_full(month);
        full.get(..1).unwrap_or(full)
    }

    /// Full day name, 0 = Sunday.
    pub fn day_full(&self, weekday: u32) -> &'static str {
        self.day_names_full[(weekday % 7) as usize]
    }

    /// First three letters of the day name.
    pub fn day_abbr(&self, weekday: u32) -> &'static str {
        let full = self.day_full(weekday);
        full.get(..3).unwrap_or(full)
    }
}
