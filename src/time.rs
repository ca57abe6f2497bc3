//! Clock readings and time-of-day presets.
//!
//! The estimator works on local wall-clock time: a decimal hour plus the ordinal day of
//! the year. Readings come from the system clock, from a `chrono` date-time, or from an
//! explicit override used to preview a given time of day.

use core::str::FromStr;

use crate::error::{Error, Result, check_day_of_year, check_hour};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// A wall-clock reading reduced to what the sky depends on.
///
/// # Example
/// ```
/// # use sky_clock::time::ClockReading;
/// let reading = ClockReading::new(14, 30, 172).unwrap();
/// assert_eq!(reading.decimal_hour(), 14.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockReading {
    hour: u32,
    minute: u32,
    day_of_year: u32,
}

impl ClockReading {
    /// Creates a reading from local hour, minute, and ordinal day.
    ///
    /// # Errors
    /// Returns `InvalidHour`, `InvalidMinute`, or `InvalidDayOfYear` for out-of-range
    /// components.
    pub fn new(hour: u32, minute: u32, day_of_year: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_hour(f64::from(hour)));
        }
        if minute > 59 {
            return Err(Error::invalid_minute(minute));
        }
        check_day_of_year(day_of_year)?;
        Ok(Self {
            hour,
            minute,
            day_of_year,
        })
    }

    /// Creates a reading from the local fields of a timezone-aware date-time.
    ///
    /// Uses the wall-clock hour and minute in `datetime`'s own timezone, not UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        Self {
            hour: datetime.hour(),
            minute: datetime.minute(),
            day_of_year: datetime.ordinal(),
        }
    }

    /// Reads the system clock in the local timezone.
    #[cfg(feature = "clock")]
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(&chrono::Local::now())
    }

    /// Hour of the day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of the hour (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Ordinal day of the year (1-366).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Time of day as a decimal hour, e.g. 14:30 → 14.5.
    #[must_use]
    pub fn decimal_hour(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

/// Fixed times of day for previewing the sky without waiting for the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 07:00
    Morning,
    /// 12:00
    Midday,
    /// 12:00
    Noon,
    /// 15:00
    Afternoon,
    /// 18:00
    Evening,
    /// 23:00
    Night,
    /// 04:00
    Early,
}

impl Preset {
    /// All presets in query-matching priority order.
    pub const ALL: [Self; 7] = [
        Self::Morning,
        Self::Midday,
        Self::Noon,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
        Self::Early,
    ];

    /// Decimal hour this preset stands for.
    #[must_use]
    pub const fn hour(self) -> f64 {
        match self {
            Self::Morning => 7.0,
            Self::Midday | Self::Noon => 12.0,
            Self::Afternoon => 15.0,
            Self::Evening => 18.0,
            Self::Night => 23.0,
            Self::Early => 4.0,
        }
    }

    /// Lower-case name used in `test=<name>` query parameters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Noon => "noon",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
            Self::Early => "early",
        }
    }

    /// Picks a preset from a URL query string such as `?view=compact&test=night`.
    ///
    /// Only `test=<name>` pairs are considered. When several are present the one that
    /// comes first in [`Preset::ALL`] wins.
    ///
    /// # Example
    /// ```
    /// # use sky_clock::time::Preset;
    /// assert_eq!(Preset::from_query("?test=evening"), Some(Preset::Evening));
    /// assert_eq!(Preset::from_query("test=night&test=morning"), Some(Preset::Morning));
    /// assert_eq!(Preset::from_query("?test=nightly"), None);
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let requested = |preset: Self| {
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .any(|(key, value)| key == "test" && value == preset.name())
        };
        Self::ALL.into_iter().find(|&preset| requested(preset))
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or(Error::UnknownPreset)
    }
}

/// Validates an explicit decimal-hour override.
///
/// # Errors
/// Returns `InvalidHour` unless `0 ≤ hour < 24`.
pub fn validate_hour(hour: f64) -> Result<f64> {
    check_hour(hour)?;
    Ok(hour)
}
