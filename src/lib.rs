//! # Sky Clock
//!
//! Day/night sky estimation for themed dashboards.
//!
//! Given a wall-clock time and the ordinal day of the year, this crate estimates
//! sunrise and sunset for a configured latitude and derives the values a page needs to
//! paint a day/night backdrop: the sun's on-screen position, its opacity, a background
//! brightness multiplier, a hue shift, and a time-banded background image.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The sunrise/sunset model is a closed-form approximation (sinusoidal declination,
//! solar noon fixed at 12:00 local time). It is meant for presentation, not astronomy.
//!
//! ## Features
//!
//! - Pure and stateless: every evaluation is recomputed from its inputs
//! - Polar day and polar night are results, not errors
//! - Configurable latitude, background bands, and brightness curves
//! - An owned refresh scheduler with explicit pause, resume, and stop
//!
//! ## Feature Flags
//!
//! - `std` (default): native math functions and the refresh scheduler
//! - `chrono` (default): evaluate directly from `DateTime<Tz>`
//! - `clock`: read the local system clock (`ClockReading::now`)
//! - `libm`: pure Rust math for `no_std` environments
//! - `serde`: (de)serialize configuration
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sky-clock = "0.1"
//!
//! # Live dashboards that read the system clock
//! sky-clock = { version = "0.1", features = ["clock"] }
//!
//! # Minimal no_std (pure numeric API)
//! sky-clock = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Evaluate a time of day
//! ```rust
//! use sky_clock::{SkyConfig, SkyEstimator};
//!
//! let estimator = SkyEstimator::new(SkyConfig::default()).unwrap();
//!
//! // 10:00 on the June solstice in Seattle
//! let appearance = estimator.evaluate_at(10.0, 172).unwrap();
//!
//! assert!(appearance.is_daytime());
//! println!("Sun at {:.1}%", appearance.sun_x().unwrap());
//! println!("Brightness: {:.2}", appearance.brightness());
//! for property in appearance.style_properties() {
//!     println!("{}: {}", property.name, property.value);
//! }
//! ```
//!
//! ### Sunrise and sunset
//! ```rust
//! use sky_clock::{solar, Daylight};
//!
//! match solar::daylight(355, 47.6062).unwrap() {
//!     Daylight::RegularDay { sunrise, sunset, .. } => {
//!         println!("Sunrise: {sunrise:.2}h, sunset: {sunset:.2}h");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### From a chrono date-time
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use sky_clock::SkyEstimator;
//!
//! let datetime = "2026-12-21T20:00:00-08:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let appearance = SkyEstimator::default().evaluate_datetime(&datetime);
//! assert!(!appearance.is_daytime());
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of boundary values in tests
)]

extern crate alloc;

// Public API exports
pub use crate::appearance::{Appearance, StyleProperty, Tuning};
pub use crate::bands::{Band, BandSet};
pub use crate::config::SkyConfig;
pub use crate::error::{Error, Result};
pub use crate::estimator::SkyEstimator;
pub use crate::time::{ClockReading, Preset};
pub use crate::types::Daylight;

// Calculation modules
pub mod appearance;
pub mod bands;
pub mod solar;

// Core modules
pub mod config;
pub mod error;
pub mod estimator;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "std")]
pub mod schedule;
pub mod time;
