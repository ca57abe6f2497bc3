//! Error types for the sky estimator.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring or evaluating the sky estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid time of day (must be a decimal hour in [0, 24)).
    InvalidHour {
        /// The invalid hour value provided.
        value: f64,
    },
    /// Invalid minute of the hour (must be 0 to 59).
    InvalidMinute {
        /// The invalid minute value provided.
        value: u32,
    },
    /// Invalid ordinal day of the year (must be 1 to 366).
    InvalidDayOfYear {
        /// The invalid day value provided.
        value: u32,
    },
    /// Background bands do not form a complete, non-overlapping cover of the day.
    InvalidBands {
        /// Description of the band constraint violation.
        message: &'static str,
    },
    /// Tuning constants that cannot produce a sensible ramp.
    InvalidTuning {
        /// Description of the tuning constraint violation.
        message: &'static str,
    },
    /// A simulation preset name that is not recognized.
    UnknownPreset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidHour { value } => {
                write!(f, "invalid hour {value} (must be in [0, 24))")
            }
            Self::InvalidMinute { value } => {
                write!(f, "invalid minute {value} (must be between 0 and 59)")
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidBands { message } => {
                write!(f, "invalid background bands: {message}")
            }
            Self::InvalidTuning { message } => {
                write!(f, "invalid tuning: {message}")
            }
            Self::UnknownPreset => write!(f, "unknown time-of-day preset"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid hour error.
    #[must_use]
    pub const fn invalid_hour(value: f64) -> Self {
        Self::InvalidHour { value }
    }

    /// Creates an invalid minute error.
    #[must_use]
    pub const fn invalid_minute(value: u32) -> Self {
        Self::InvalidMinute { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid bands error.
    #[must_use]
    pub const fn invalid_bands(message: &'static str) -> Self {
        Self::InvalidBands { message }
    }

    /// Creates an invalid tuning error.
    #[must_use]
    pub const fn invalid_tuning(message: &'static str) -> Self {
        Self::InvalidTuning { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates a decimal hour is within [0, 24).
///
/// # Errors
/// Returns `InvalidHour` for negative, non-finite, or ≥ 24 values.
pub fn check_hour(hour: f64) -> Result<()> {
    if !(0.0..24.0).contains(&hour) {
        return Err(Error::invalid_hour(hour));
    }
    Ok(())
}

/// Validates an ordinal day of the year (1 to 366).
///
/// # Errors
/// Returns `InvalidDayOfYear` if the day is outside 1 to 366.
pub fn check_day_of_year(day_of_year: u32) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}
