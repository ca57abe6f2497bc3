//! Presentation values derived from the daylight window.
//!
//! An [`Appearance`] is what a caller writes into its visual environment: where the
//! sun sits on screen, how bright the background is, which tint and image to use.

#![allow(clippy::suboptimal_flops)]

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::bands::BandSet;
use crate::error::{Error, Result};
use crate::math::{PI, clamp, lerp, sin};
use crate::Daylight;

/// Constants shaping the dawn/plateau/dusk curves and the sun's on-screen arc.
///
/// Brightness and sun opacity ramp linearly from their dawn values to the midday
/// plateau over the first `ramp_hours` after sunrise, and from the plateau to their
/// dusk values over the last `ramp_hours` before sunset. When the day is shorter than
/// two ramps the dawn ramp wins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Length of the dawn and dusk ramps in hours.
    pub ramp_hours: f64,
    /// Brightness multiplier at sunrise.
    pub dawn_brightness: f64,
    /// Brightness multiplier on the midday plateau.
    pub peak_brightness: f64,
    /// Brightness multiplier at sunset.
    pub dusk_brightness: f64,
    /// Sun opacity at sunrise.
    pub dawn_opacity: f64,
    /// Sun opacity at sunset.
    pub dusk_opacity: f64,
    /// Brightness multiplier while the sun is down.
    pub night_brightness: f64,
    /// Background opacity throughout the dawn ramp.
    pub dawn_background_opacity: f64,
    /// Background opacity on the midday plateau.
    pub peak_background_opacity: f64,
    /// Background opacity throughout the dusk ramp.
    pub dusk_background_opacity: f64,
    /// Background opacity while the sun is down.
    pub night_background_opacity: f64,
    /// Hue rotation in degrees while the sun is up.
    pub day_hue: f64,
    /// Hue rotation in degrees while the sun is down.
    pub night_hue: f64,
    /// Horizontal sun position at sunrise, in percent.
    pub sun_x_start: f64,
    /// Horizontal distance the sun travels by sunset, in percent.
    pub sun_x_span: f64,
    /// Vertical sun position at the horizon, in percent from the top.
    pub sun_y_base: f64,
    /// Vertical arc height at midday, in percent (negative moves the sun up).
    pub sun_arc_amplitude: f64,
}

impl Tuning {
    /// High-contrast profile: two-hour ramps, 1.8× midday brightness, and a sun that
    /// fades in from 70% and fully out by sunset. The background steps between 0.8, 0.9
    /// and 0.7 opacity across dawn, midday and dusk.
    #[must_use]
    pub const fn vivid() -> Self {
        Self {
            ramp_hours: 2.0,
            dawn_brightness: 1.0,
            peak_brightness: 1.8,
            dusk_brightness: 0.6,
            dawn_opacity: 0.7,
            dusk_opacity: 0.0,
            night_brightness: 0.6,
            dawn_background_opacity: 0.8,
            peak_background_opacity: 0.9,
            dusk_background_opacity: 0.7,
            night_background_opacity: 0.6,
            day_hue: 0.0,
            night_hue: 15.0,
            sun_x_start: 20.0,
            sun_x_span: 60.0,
            sun_y_base: 10.0,
            sun_arc_amplitude: -5.0,
        }
    }

    /// Gentle profile: one-hour ramps between 0.8× and 1.2×, an always-opaque sun and a
    /// fixed 0.7 background opacity by day.
    #[must_use]
    pub const fn subtle() -> Self {
        Self {
            ramp_hours: 1.0,
            dawn_brightness: 0.8,
            peak_brightness: 1.2,
            dusk_brightness: 0.8,
            dawn_opacity: 1.0,
            dusk_opacity: 1.0,
            night_brightness: 0.6,
            dawn_background_opacity: 0.7,
            peak_background_opacity: 0.7,
            dusk_background_opacity: 0.7,
            night_background_opacity: 0.6,
            day_hue: 0.0,
            night_hue: 20.0,
            sun_x_start: 20.0,
            sun_x_span: 60.0,
            sun_y_base: 20.0,
            sun_arc_amplitude: -10.0,
        }
    }

    /// Checks that every constant is finite and the ramps have positive length.
    ///
    /// # Errors
    /// Returns `InvalidTuning` describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.ramp_hours,
            self.dawn_brightness,
            self.peak_brightness,
            self.dusk_brightness,
            self.dawn_opacity,
            self.dusk_opacity,
            self.night_brightness,
            self.dawn_background_opacity,
            self.peak_background_opacity,
            self.dusk_background_opacity,
            self.night_background_opacity,
            self.day_hue,
            self.night_hue,
            self.sun_x_start,
            self.sun_x_span,
            self.sun_y_base,
            self.sun_arc_amplitude,
        ];
        if !values.iter().all(|value| value.is_finite()) {
            return Err(Error::invalid_tuning("constants must be finite"));
        }
        if self.ramp_hours <= 0.0 {
            return Err(Error::invalid_tuning("ramp length must be positive"));
        }
        if self.night_brightness < 0.0 || self.peak_brightness < 0.0 {
            return Err(Error::invalid_tuning("brightness must not be negative"));
        }
        let opacities = [
            self.dawn_background_opacity,
            self.peak_background_opacity,
            self.dusk_background_opacity,
            self.night_background_opacity,
        ];
        if !opacities.iter().all(|opacity| (0.0..=1.0).contains(opacity)) {
            return Err(Error::invalid_tuning("background opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::vivid()
    }
}

/// One named CSS custom property and its rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    /// Property name, including the leading `--`.
    pub name: &'static str,
    /// Rendered value, with units.
    pub value: String,
}

/// Presentation state for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    hour: f64,
    progress: Option<f64>,
    sun_x: Option<f64>,
    sun_y: Option<f64>,
    sun_opacity: f64,
    brightness: f64,
    background_opacity: f64,
    hue_shift: f64,
    background: String,
}

impl Appearance {
    /// Derives the presentation state at decimal hour `hour` for a day's daylight window.
    #[must_use]
    pub fn compute(daylight: &Daylight, hour: f64, bands: &BandSet, tuning: &Tuning) -> Self {
        let background = String::from(bands.select(hour).image());

        let Some(progress) = daylight.progress(hour) else {
            return Self {
                hour,
                progress: None,
                sun_x: None,
                sun_y: None,
                sun_opacity: 0.0,
                brightness: tuning.night_brightness,
                background_opacity: tuning.night_background_opacity,
                hue_shift: tuning.night_hue,
                background,
            };
        };

        let sun_x = tuning.sun_x_start + progress * tuning.sun_x_span;
        let sun_y = tuning.sun_y_base + tuning.sun_arc_amplitude * sin(PI * progress);

        let phase = match (daylight.sunrise(), daylight.sunset()) {
            (Some(sunrise), Some(sunset)) => ramp(hour, sunrise, sunset, tuning),
            _ => Phase {
                brightness: tuning.peak_brightness,
                sun_opacity: 1.0,
                background_opacity: tuning.peak_background_opacity,
            },
        };

        Self {
            hour,
            progress: Some(progress),
            sun_x: Some(sun_x),
            sun_y: Some(sun_y),
            sun_opacity: clamp(phase.sun_opacity, 0.0, 1.0),
            brightness: phase.brightness,
            background_opacity: phase.background_opacity,
            hue_shift: tuning.day_hue,
            background,
        }
    }

    /// Decimal hour this appearance was computed for.
    #[must_use]
    pub const fn hour(&self) -> f64 {
        self.hour
    }

    /// Checks if the sun is up.
    #[must_use]
    pub const fn is_daytime(&self) -> bool {
        self.progress.is_some()
    }

    /// Fraction of the daylight window elapsed, or `None` at night.
    #[must_use]
    pub const fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Horizontal sun position in percent, or `None` at night.
    #[must_use]
    pub const fn sun_x(&self) -> Option<f64> {
        self.sun_x
    }

    /// Vertical sun position in percent from the top, or `None` at night.
    #[must_use]
    pub const fn sun_y(&self) -> Option<f64> {
        self.sun_y
    }

    /// Sun opacity in [0, 1].
    #[must_use]
    pub const fn sun_opacity(&self) -> f64 {
        self.sun_opacity
    }

    /// Background brightness multiplier.
    #[must_use]
    pub const fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Background opacity in [0, 1].
    #[must_use]
    pub const fn background_opacity(&self) -> f64 {
        self.background_opacity
    }

    /// Background hue rotation in degrees.
    #[must_use]
    pub const fn hue_shift(&self) -> f64 {
        self.hue_shift
    }

    /// Background image identifier.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Renders the CSS custom properties a page applies to its root element.
    ///
    /// Sun position is only emitted while the sun is up; at night the page keeps
    /// whatever position it last had and relies on zero opacity.
    ///
    /// # Example
    /// ```
    /// use sky_clock::{SkyConfig, SkyEstimator};
    ///
    /// let estimator = SkyEstimator::new(SkyConfig::default()).unwrap();
    /// let night = estimator.evaluate_at(23.0, 10).unwrap();
    /// let names: Vec<_> = night.style_properties().iter().map(|p| p.name).collect();
    /// assert_eq!(
    ///     names,
    ///     ["--bg-image", "--sun-opacity", "--bg-brightness", "--bg-opacity", "--bg-hue"]
    /// );
    /// ```
    #[must_use]
    pub fn style_properties(&self) -> Vec<StyleProperty> {
        let mut properties = Vec::with_capacity(7);
        properties.push(StyleProperty {
            name: "--bg-image",
            value: format!("url('{}')", self.background),
        });
        if let (Some(x), Some(y)) = (self.sun_x, self.sun_y) {
            properties.push(StyleProperty {
                name: "--sun-x",
                value: format!("{x}%"),
            });
            properties.push(StyleProperty {
                name: "--sun-y",
                value: format!("{y}%"),
            });
        }
        properties.push(StyleProperty {
            name: "--sun-opacity",
            value: format!("{}", self.sun_opacity),
        });
        properties.push(StyleProperty {
            name: "--bg-brightness",
            value: format!("{}", self.brightness),
        });
        properties.push(StyleProperty {
            name: "--bg-opacity",
            value: format!("{}", self.background_opacity),
        });
        properties.push(StyleProperty {
            name: "--bg-hue",
            value: format!("{}deg", self.hue_shift),
        });
        properties
    }
}

/// Daytime values at one point of the dawn/plateau/dusk curve. Sun opacity is unclamped.
struct Phase {
    brightness: f64,
    sun_opacity: f64,
    background_opacity: f64,
}

fn ramp(hour: f64, sunrise: f64, sunset: f64, tuning: &Tuning) -> Phase {
    let dusk_start = sunset - tuning.ramp_hours;
    if hour < sunrise + tuning.ramp_hours {
        let amount = (hour - sunrise) / tuning.ramp_hours;
        Phase {
            brightness: lerp(tuning.dawn_brightness, tuning.peak_brightness, amount),
            sun_opacity: lerp(tuning.dawn_opacity, 1.0, amount),
            background_opacity: tuning.dawn_background_opacity,
        }
    } else if hour > dusk_start {
        let amount = (hour - dusk_start) / tuning.ramp_hours;
        Phase {
            brightness: lerp(tuning.peak_brightness, tuning.dusk_brightness, amount),
            sun_opacity: lerp(1.0, tuning.dusk_opacity, amount),
            background_opacity: tuning.dusk_background_opacity,
        }
    } else {
        Phase {
            brightness: tuning.peak_brightness,
            sun_opacity: 1.0,
            background_opacity: tuning.peak_background_opacity,
        }
    }
}
