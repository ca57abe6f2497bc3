//! The sky estimator: clock reading in, presentation values out.

use crate::appearance::Appearance;
use crate::config::SkyConfig;
use crate::error::{Result, check_day_of_year};
use crate::solar::daylight_unchecked;
use crate::time::{ClockReading, Preset, validate_hour};
use crate::Daylight;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Computes sky appearances for a fixed configuration.
///
/// Evaluation is a pure function of the configuration and the reading: there is no
/// caching and no state between calls, so identical inputs give identical outputs.
///
/// # Example
/// ```
/// use sky_clock::{SkyConfig, SkyEstimator, time::ClockReading};
///
/// let estimator = SkyEstimator::new(SkyConfig::default()).unwrap();
///
/// // Mid-afternoon in early July
/// let appearance = estimator.evaluate(ClockReading::new(15, 0, 185).unwrap());
/// assert!(appearance.is_daytime());
/// assert_eq!(appearance.background(), "/static/IMG_6143_afternoon_correct.jpeg");
///
/// // Late evening in January
/// let appearance = estimator.evaluate_at(21.5, 15).unwrap();
/// assert!(!appearance.is_daytime());
/// assert_eq!(appearance.sun_opacity(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyEstimator {
    config: SkyConfig,
}

impl SkyEstimator {
    /// Creates an estimator, validating the configuration.
    ///
    /// # Errors
    /// Returns the first invariant `config` violates.
    pub fn new(config: SkyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this estimator evaluates with.
    #[must_use]
    pub const fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Sunrise, solar noon, and sunset for a day at the configured latitude.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` if the day is outside 1 to 366.
    pub fn daylight(&self, day_of_year: u32) -> Result<Daylight> {
        check_day_of_year(day_of_year)?;
        Ok(daylight_unchecked(day_of_year, self.config.latitude()))
    }

    /// Evaluates the sky for a wall-clock reading.
    #[must_use]
    pub fn evaluate(&self, reading: ClockReading) -> Appearance {
        self.appearance_for(reading.decimal_hour(), reading.day_of_year())
    }

    /// Evaluates the sky at an explicit decimal hour, bypassing the clock.
    ///
    /// # Errors
    /// Returns `InvalidHour` unless `0 ≤ hour < 24`, or `InvalidDayOfYear`.
    pub fn evaluate_at(&self, hour: f64, day_of_year: u32) -> Result<Appearance> {
        let hour = validate_hour(hour)?;
        check_day_of_year(day_of_year)?;
        Ok(self.appearance_for(hour, day_of_year))
    }

    /// Evaluates the sky at a preset time of day.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` if the day is outside 1 to 366.
    pub fn simulate(&self, preset: Preset, day_of_year: u32) -> Result<Appearance> {
        log::info!("simulating {} ({}h)", preset.name(), preset.hour());
        self.evaluate_at(preset.hour(), day_of_year)
    }

    /// Evaluates the sky at the local wall-clock time of `datetime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn evaluate_datetime<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Appearance {
        self.evaluate(ClockReading::from_datetime(datetime))
    }

    /// Evaluates the sky for the system clock right now.
    #[cfg(feature = "clock")]
    #[must_use]
    pub fn evaluate_now(&self) -> Appearance {
        self.evaluate(ClockReading::now())
    }

    fn appearance_for(&self, hour: f64, day_of_year: u32) -> Appearance {
        let daylight = daylight_unchecked(day_of_year, self.config.latitude());
        let appearance = Appearance::compute(
            &daylight,
            hour,
            self.config.bands(),
            self.config.tuning(),
        );

        match (appearance.sun_x(), appearance.sun_y()) {
            (Some(x), Some(y)) => log::debug!(
                "daytime mode: {hour:.1}h, sun at {x:.1}%, {y:.1}%, brightness {:.1}",
                appearance.brightness()
            ),
            _ => log::debug!("night mode: {hour:.1}h, no sun, dark background"),
        }

        appearance
    }
}
