//! Estimator configuration.

use crate::appearance::Tuning;
use crate::bands::BandSet;
use crate::error::{Result, check_latitude};

/// Seattle, the dashboard's reference location.
pub const DEFAULT_LATITUDE: f64 = 47.6062;

/// Everything the estimator needs besides the clock: where, which images, which curves.
///
/// # Example
/// ```
/// use sky_clock::{SkyConfig, Tuning};
///
/// let config = SkyConfig::default()
///     .with_latitude(59.3293)   // Stockholm
///     .unwrap()
///     .with_tuning(Tuning::subtle())
///     .unwrap();
/// assert_eq!(config.latitude(), 59.3293);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyConfig {
    latitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    bands: BandSet,
    #[cfg_attr(feature = "serde", serde(default))]
    tuning: Tuning,
}

impl SkyConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` for latitudes outside ±90° and `InvalidTuning` for
    /// unusable tuning constants.
    pub fn new(latitude: f64, bands: BandSet, tuning: Tuning) -> Result<Self> {
        let config = Self {
            latitude,
            bands,
            tuning,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks invariants; needed for configurations that were deserialized.
    ///
    /// # Errors
    /// Same as [`SkyConfig::new`].
    pub fn validate(&self) -> Result<()> {
        check_latitude(self.latitude)?;
        self.tuning.validate()
    }

    /// Replaces the latitude.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` for latitudes outside ±90°.
    pub fn with_latitude(mut self, latitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        self.latitude = latitude;
        Ok(self)
    }

    /// Replaces the background bands.
    #[must_use]
    pub fn with_bands(mut self, bands: BandSet) -> Self {
        self.bands = bands;
        self
    }

    /// Replaces the tuning profile.
    ///
    /// # Errors
    /// Returns `InvalidTuning` for unusable tuning constants.
    pub fn with_tuning(mut self, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(self)
    }

    /// Observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Background bands.
    #[must_use]
    pub const fn bands(&self) -> &BandSet {
        &self.bands
    }

    /// Tuning profile.
    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            bands: BandSet::default(),
            tuning: Tuning::vivid(),
        }
    }
}
