//! Core data types for daylight calculations.

/// Daylight window for a single day at a given latitude.
///
/// Times are decimal hours of local solar time (e.g. 14.5 = 14:30), with solar noon
/// fixed at 12.0. At extreme latitudes the sun may stay above or below the horizon
/// for the whole day, in which case no sunrise or sunset exists.
///
/// # Example
/// ```
/// # use sky_clock::types::Daylight;
/// let day = Daylight::RegularDay { sunrise: 6.0, noon: 12.0, sunset: 18.0 };
/// assert_eq!(day.length(), 12.0);
/// assert_eq!(day.progress(9.0), Some(0.25));
/// assert_eq!(day.progress(20.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Daylight {
    /// Regular day with distinct sunrise, solar noon, and sunset times
    RegularDay {
        /// Decimal hour of sunrise
        sunrise: f64,
        /// Decimal hour of solar noon
        noon: f64,
        /// Decimal hour of sunset
        sunset: f64,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Decimal hour of solar noon
        noon: f64,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Decimal hour of solar noon
        noon: f64,
    },
}

impl Daylight {
    /// Gets the solar noon for any daylight result.
    #[must_use]
    pub const fn noon(&self) -> f64 {
        match self {
            Self::RegularDay { noon, .. } | Self::AllDay { noon } | Self::AllNight { noon } => {
                *noon
            }
        }
    }

    /// Gets sunrise time if this is a regular day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<f64> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    #[must_use]
    pub const fn sunset(&self) -> Option<f64> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Length of daylight in hours (24 for polar day, 0 for polar night).
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::RegularDay {
                sunrise, sunset, ..
            } => sunset - sunrise,
            Self::AllDay { .. } => 24.0,
            Self::AllNight { .. } => 0.0,
        }
    }

    /// Checks whether the sun is up at decimal hour `hour`.
    ///
    /// Sunrise and sunset themselves count as daytime.
    #[must_use]
    pub fn is_daytime(&self, hour: f64) -> bool {
        self.progress(hour).is_some()
    }

    /// Fraction of the daylight window elapsed at decimal hour `hour`.
    ///
    /// Returns `Some(0.0)` exactly at sunrise, `Some(1.0)` exactly at sunset and
    /// `None` outside the window. During polar day the whole clock is the window,
    /// so the fraction is `hour / 24`.
    #[must_use]
    pub fn progress(&self, hour: f64) -> Option<f64> {
        match *self {
            Self::RegularDay {
                sunrise, sunset, ..
            } => {
                if !(sunrise..=sunset).contains(&hour) {
                    return None;
                }
                let span = sunset - sunrise;
                if span > 0.0 {
                    Some((hour - sunrise) / span)
                } else {
                    // Sun grazes the horizon at noon only
                    Some(0.5)
                }
            }
            Self::AllDay { .. } => Some(hour / 24.0),
            Self::AllNight { .. } => None,
        }
    }
}
