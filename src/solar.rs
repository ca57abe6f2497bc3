//! Approximate sunrise/sunset estimation.
//!
//! Uses the textbook closed-form approximation: the solar declination is modelled as a
//! sinusoid over the year (Cooper's equation) and the sunrise hour angle follows from
//! `cos(H) = -tan(φ)·tan(δ)`. Solar noon is fixed at 12:00 local time, so results are
//! in local *solar* time, good to a few minutes around mid-latitudes.
//!
//! Reference: Cooper, P. I. (1969). The absorption of radiation in solar stills.
//! Solar Energy, 12(3), 333-346.

use crate::error::{check_day_of_year, check_latitude};
use crate::math::{acos, degrees_to_radians, radians_to_hours, sin, tan};
use crate::{Daylight, Result};

/// Solar noon as a decimal hour.
pub const SOLAR_NOON: f64 = 12.0;

/// Maximum solar declination (axial tilt) in degrees.
pub const MAX_DECLINATION: f64 = 23.45;

/// Solar declination in degrees for an ordinal day of the year.
///
/// `δ = 23.45° × sin(360° × (284 + d) / 365)`. Ranges over ±23.45°, crossing zero near
/// the equinoxes.
///
/// # Example
/// ```
/// # use sky_clock::solar::declination;
/// // Near the June solstice the declination peaks at the axial tilt
/// assert!((declination(172) - 23.45).abs() < 0.01);
/// ```
#[must_use]
pub fn declination(day_of_year: u32) -> f64 {
    let day_angle = 360.0 * (284.0 + f64::from(day_of_year)) / 365.0;
    MAX_DECLINATION * sin(degrees_to_radians(day_angle))
}

/// Calculate sunrise, solar noon, and sunset for a day of the year at a latitude.
///
/// The arc-cosine argument of the hour-angle formula is checked against its [-1, 1]
/// domain: below -1 the sun never sets ([`Daylight::AllDay`]), above +1 it never rises
/// ([`Daylight::AllNight`]).
///
/// # Arguments
/// * `day_of_year` - Ordinal day (1-366)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
///
/// # Errors
/// Returns `InvalidDayOfYear` or `InvalidLatitude` for out-of-range inputs.
///
/// # Example
/// ```
/// use sky_clock::solar;
///
/// let day = solar::daylight(80, 47.6062).unwrap();
/// let sunrise = day.sunrise().unwrap();
/// let sunset = day.sunset().unwrap();
/// assert!(sunrise < 12.0 && 12.0 < sunset);
/// ```
pub fn daylight(day_of_year: u32, latitude: f64) -> Result<Daylight> {
    check_day_of_year(day_of_year)?;
    check_latitude(latitude)?;
    Ok(daylight_unchecked(day_of_year, latitude))
}

/// Core calculation for already-validated inputs.
pub(crate) fn daylight_unchecked(day_of_year: u32, latitude: f64) -> Daylight {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination(day_of_year));

    let acos_arg = -tan(phi) * tan(delta);

    if acos_arg < -1.0 {
        Daylight::AllDay { noon: SOLAR_NOON }
    } else if acos_arg > 1.0 {
        Daylight::AllNight { noon: SOLAR_NOON }
    } else {
        let half_day = radians_to_hours(acos(acos_arg));
        Daylight::RegularDay {
            sunrise: SOLAR_NOON - half_day,
            noon: SOLAR_NOON,
            sunset: SOLAR_NOON + half_day,
        }
    }
}
