//! Time-of-day background bands.
//!
//! A [`BandSet`] partitions the 24-hour clock into half-open ranges, each mapped to a
//! background image. Bands may wrap past midnight, e.g. `[22, 2)`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::math::normalize_hours_0_to_24;

/// A half-open range of decimal hours `[start, end)` mapped to a background image.
///
/// When `start > end` the band wraps past midnight and covers `[start, 24) ∪ [0, end)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedBand")
)]
pub struct Band {
    start_hour: f64,
    end_hour: f64,
    image: String,
}

/// Wire form of a [`Band`], checked on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedBand {
    start_hour: f64,
    end_hour: f64,
    image: String,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedBand> for Band {
    type Error = Error;

    fn try_from(band: UncheckedBand) -> Result<Self> {
        Self::new(band.start_hour, band.end_hour, band.image)
    }
}

impl Band {
    /// Creates a band covering `[start_hour, end_hour)`.
    ///
    /// # Errors
    /// Returns `InvalidBands` if `start_hour` is outside [0, 24), `end_hour` is outside
    /// (0, 24], or the two are equal.
    ///
    /// # Example
    /// ```
    /// # use sky_clock::bands::Band;
    /// let late_night = Band::new(22.0, 2.0, "/static/night.jpeg").unwrap();
    /// assert!(late_night.contains(23.5));
    /// assert!(late_night.contains(1.0));
    /// assert!(!late_night.contains(2.0));
    /// ```
    pub fn new(start_hour: f64, end_hour: f64, image: impl Into<String>) -> Result<Self> {
        let band = Self {
            start_hour,
            end_hour,
            image: image.into(),
        };
        band.check()?;
        Ok(band)
    }

    fn check(&self) -> Result<()> {
        if !(0.0..24.0).contains(&self.start_hour) {
            return Err(Error::invalid_bands("band start must be in [0, 24)"));
        }
        if !(self.end_hour > 0.0 && self.end_hour <= 24.0) {
            return Err(Error::invalid_bands("band end must be in (0, 24]"));
        }
        if self.start_hour == self.end_hour {
            return Err(Error::invalid_bands("band is empty"));
        }
        Ok(())
    }

    /// Decimal hour at which this band starts (inclusive).
    #[must_use]
    pub const fn start_hour(&self) -> f64 {
        self.start_hour
    }

    /// Decimal hour at which this band ends (exclusive).
    #[must_use]
    pub const fn end_hour(&self) -> f64 {
        self.end_hour
    }

    /// Background image identifier.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Checks if this band wraps past midnight.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.start_hour > self.end_hour
    }

    /// Checks whether decimal hour `hour` (in [0, 24)) falls inside this band.
    #[must_use]
    pub fn contains(&self, hour: f64) -> bool {
        if self.wraps_midnight() {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            self.start_hour <= hour && hour < self.end_hour
        }
    }
}

/// A validated, gap-free and non-overlapping cover of the 24-hour clock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Band>", into = "Vec<Band>")
)]
pub struct BandSet {
    bands: Vec<Band>,
}

impl BandSet {
    /// Creates a band set, checking that every hour of the day maps to exactly one band.
    ///
    /// # Errors
    /// Returns `InvalidBands` if the list is empty, any band is malformed, or the bands
    /// leave a gap or overlap.
    pub fn new(bands: Vec<Band>) -> Result<Self> {
        if bands.is_empty() {
            return Err(Error::invalid_bands("at least one band is required"));
        }
        for band in &bands {
            band.check()?;
        }

        // Membership is constant between consecutive boundaries, so probing each
        // boundary covers every elementary interval of the clock.
        let mut boundaries: Vec<f64> = Vec::with_capacity(bands.len() * 2 + 1);
        boundaries.push(0.0);
        for band in &bands {
            boundaries.push(band.start_hour);
            boundaries.push(normalize_hours_0_to_24(band.end_hour));
        }
        boundaries.sort_by(f64::total_cmp);
        boundaries.dedup();

        for &hour in &boundaries {
            match bands.iter().filter(|band| band.contains(hour)).count() {
                0 => return Err(Error::invalid_bands("bands leave a gap in the day")),
                1 => {}
                _ => return Err(Error::invalid_bands("bands overlap")),
            }
        }

        Ok(Self { bands })
    }

    /// Selects the band covering decimal hour `hour`.
    ///
    /// Hours outside [0, 24) are wrapped onto the clock first. A boundary hour selects
    /// the band that starts there.
    #[must_use]
    pub fn select(&self, hour: f64) -> &Band {
        let mut hour = normalize_hours_0_to_24(hour);
        if hour >= 24.0 {
            hour = 0.0;
        }
        self.bands
            .iter()
            .find(|band| band.contains(hour))
            .unwrap_or(&self.bands[0])
    }

    /// All bands in declaration order.
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Always false for a validated set; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for BandSet {
    /// The dashboard's six four-hour bands.
    fn default() -> Self {
        let band = |start_hour: f64, end_hour: f64, image: &str| Band {
            start_hour,
            end_hour,
            image: String::from(image),
        };
        Self {
            bands: alloc::vec![
                band(2.0, 6.0, "/static/IMG_6161_early_morning.jpeg"),
                band(6.0, 10.0, "/static/IMG_6143.jpeg"),
                band(10.0, 14.0, "/static/IMG_6237_midday.jpeg"),
                band(14.0, 18.0, "/static/IMG_6143_afternoon_correct.jpeg"),
                band(18.0, 22.0, "/static/IMG_6161_evening.jpeg"),
                band(22.0, 2.0, "/static/IMG_6161_late_night.jpeg"),
            ],
        }
    }
}

impl TryFrom<Vec<Band>> for BandSet {
    type Error = Error;

    fn try_from(bands: Vec<Band>) -> Result<Self> {
        Self::new(bands)
    }
}

impl From<BandSet> for Vec<Band> {
    fn from(set: BandSet) -> Self {
        set.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_default_bands_are_valid() {
        let defaults = BandSet::default();
        assert_eq!(defaults.len(), 6);
        assert_eq!(BandSet::new(defaults.bands().to_vec()), Ok(defaults));
    }

    #[test]
    fn test_default_band_selection() {
        let bands = BandSet::default();
        assert_eq!(
            bands.select(4.0).image(),
            "/static/IMG_6161_early_morning.jpeg"
        );
        assert_eq!(bands.select(7.0).image(), "/static/IMG_6143.jpeg");
        assert_eq!(bands.select(12.0).image(), "/static/IMG_6237_midday.jpeg");
        assert_eq!(
            bands.select(15.0).image(),
            "/static/IMG_6143_afternoon_correct.jpeg"
        );
        assert_eq!(bands.select(18.0).image(), "/static/IMG_6161_evening.jpeg");
        assert_eq!(bands.select(23.0).image(), "/static/IMG_6161_late_night.jpeg");
        assert_eq!(bands.select(0.5).image(), "/static/IMG_6161_late_night.jpeg");
    }

    #[test]
    fn test_select_wraps_out_of_range_hours() {
        let bands = BandSet::default();
        assert_eq!(bands.select(24.0), bands.select(0.0));
        assert_eq!(bands.select(-1.0), bands.select(23.0));
        assert_eq!(bands.select(30.0), bands.select(6.0));
        assert_eq!(bands.select(-1e-20), bands.select(0.0));
    }

    #[test]
    fn test_band_validation() {
        assert!(Band::new(0.0, 24.0, "all").is_ok());
        assert!(Band::new(22.0, 2.0, "wrap").is_ok());

        assert!(Band::new(-1.0, 2.0, "x").is_err());
        assert!(Band::new(24.0, 2.0, "x").is_err());
        assert!(Band::new(2.0, 0.0, "x").is_err());
        assert!(Band::new(2.0, 25.0, "x").is_err());
        assert!(Band::new(5.0, 5.0, "x").is_err());
        assert!(Band::new(f64::NAN, 5.0, "x").is_err());
    }

    #[test]
    fn test_single_band_covers_day() {
        let set = BandSet::new(vec![Band::new(0.0, 24.0, "only").unwrap()]).unwrap();
        assert_eq!(set.select(0.0).image(), "only");
        assert_eq!(set.select(23.99).image(), "only");

        // An end of 24 meets a start of 0
        let set = BandSet::new(vec![
            Band::new(6.0, 24.0, "day").unwrap(),
            Band::new(0.0, 6.0, "night").unwrap(),
        ])
        .unwrap();
        assert_eq!(set.select(5.99).image(), "night");
        assert_eq!(set.select(6.0).image(), "day");
    }

    #[test]
    fn test_gap_is_rejected() {
        let result = BandSet::new(vec![
            Band::new(0.0, 10.0, "a").unwrap(),
            Band::new(12.0, 24.0, "b").unwrap(),
        ]);
        assert_eq!(
            result,
            Err(Error::invalid_bands("bands leave a gap in the day"))
        );
    }

    #[test]
    fn test_overlap_is_rejected() {
        let result = BandSet::new(vec![
            Band::new(20.0, 4.0, "a").unwrap(),
            Band::new(3.0, 20.0, "b").unwrap(),
        ]);
        assert_eq!(result, Err(Error::invalid_bands("bands overlap")));
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(BandSet::new(Vec::new()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_band_is_checked() {
        let band: Band =
            serde_json::from_str(r#"{ "start_hour": 22.0, "end_hour": 2.0, "image": "n" }"#)
                .unwrap();
        assert!(band.wraps_midnight());

        for json in [
            r#"{ "start_hour": 30.0, "end_hour": 2.0, "image": "n" }"#,
            r#"{ "start_hour": 4.0, "end_hour": 25.0, "image": "n" }"#,
            r#"{ "start_hour": 4.0, "end_hour": 4.0, "image": "n" }"#,
        ] {
            let error = serde_json::from_str::<Band>(json).unwrap_err();
            assert!(error.to_string().contains("band"), "{json}: {error}");
        }
    }
}
