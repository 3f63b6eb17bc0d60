//! Formatting options and configuration.

use crate::locale::Locale;

/// The epoch used to turn serial numbers into dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Serial 1 is 1900-01-01, with the phantom 1900-02-29 at serial 60
    #[default]
    Date1900,
    /// Serial 0 is 1904-01-01
    Date1904,
}

impl DateSystem {
    /// Returns the epoch year for this date system.
    pub fn epoch_year(&self) -> i32 {
        match self {
            DateSystem::Date1900 => 1900,
            DateSystem::Date1904 => 1904,
        }
    }
}

/// Options for formatting values.
///
/// The defaults are the 1900 date system and US English names and
/// separators.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub date_system: DateSystem,
    pub locale: Locale,
}

impl FormatOptions {
    /// Options using the 1904 date system.
    pub fn date1904() -> Self {
        FormatOptions {
            date_system: DateSystem::Date1904,
            ..FormatOptions::default()
        }
    }

    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
