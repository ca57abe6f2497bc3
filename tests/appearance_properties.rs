//! Behavioural properties of the evaluated sky over whole days.

use sky_clock::{Band, BandSet, SkyConfig, SkyEstimator, Tuning};

const SAMPLES_PER_HOUR: u32 = 60;

fn sample_hours() -> impl Iterator<Item = f64> {
    (0..24 * SAMPLES_PER_HOUR).map(|i| f64::from(i) / f64::from(SAMPLES_PER_HOUR))
}

#[test]
fn test_progress_is_exact_at_sunrise_and_sunset() {
    let estimator = SkyEstimator::default();
    for day_of_year in [1, 80, 172, 266, 355] {
        let daylight = estimator.daylight(day_of_year).unwrap();
        let sunrise = daylight.sunrise().unwrap();
        let sunset = daylight.sunset().unwrap();

        let at_sunrise = estimator.evaluate_at(sunrise, day_of_year).unwrap();
        let at_sunset = estimator.evaluate_at(sunset, day_of_year).unwrap();

        assert_eq!(at_sunrise.progress(), Some(0.0));
        assert_eq!(at_sunset.progress(), Some(1.0));
        assert_eq!(at_sunrise.sun_x(), Some(20.0));
        assert_eq!(at_sunset.sun_x(), Some(80.0));
    }
}

#[test]
fn test_sun_x_is_monotonic_over_daylight() {
    let estimator = SkyEstimator::default();
    for day_of_year in [15, 172, 300] {
        let mut previous = f64::NEG_INFINITY;
        for hour in sample_hours() {
            let appearance = estimator.evaluate_at(hour, day_of_year).unwrap();
            if let Some(x) = appearance.sun_x() {
                assert!(x >= previous, "sun moved backwards at {hour}h");
                assert!((20.0..=80.0).contains(&x));
                previous = x;
            }
        }
        assert!(previous > 79.0, "sun never neared the right edge");
    }
}

#[test]
fn test_brightness_ramps_up_holds_and_ramps_down() {
    let estimator = SkyEstimator::default();
    let tuning = Tuning::vivid();
    let daylight = estimator.daylight(172).unwrap();
    let sunrise = daylight.sunrise().unwrap();
    let sunset = daylight.sunset().unwrap();

    let brightness = |hour: f64| estimator.evaluate_at(hour, 172).unwrap().brightness();

    let mut previous = brightness(sunrise);
    let mut hour = sunrise;
    while hour < sunrise + tuning.ramp_hours {
        let current = brightness(hour);
        assert!(current >= previous);
        previous = current;
        hour += 0.05;
    }

    assert_eq!(brightness(12.0), tuning.peak_brightness);
    assert_eq!(brightness(sunrise + tuning.ramp_hours + 0.1), tuning.peak_brightness);
    assert_eq!(brightness(sunset - tuning.ramp_hours - 0.1), tuning.peak_brightness);

    let mut previous = brightness(sunset - tuning.ramp_hours);
    let mut hour = sunset - tuning.ramp_hours;
    while hour <= sunset {
        let current = brightness(hour);
        assert!(current <= previous);
        previous = current;
        hour += 0.05;
    }
}

#[test]
fn test_opacity_stays_in_unit_range() {
    for tuning in [Tuning::vivid(), Tuning::subtle()] {
        let config = SkyConfig::default().with_tuning(tuning).unwrap();
        let estimator = SkyEstimator::new(config).unwrap();
        for day_of_year in [1, 172] {
            for hour in sample_hours() {
                let opacity = estimator.evaluate_at(hour, day_of_year).unwrap().sun_opacity();
                assert!((0.0..=1.0).contains(&opacity), "{opacity} at {hour}h");
            }
        }
    }
}

#[test]
fn test_night_values() {
    let estimator = SkyEstimator::default();
    let tuning = estimator.config().tuning();
    let daylight = estimator.daylight(355).unwrap();

    for hour in sample_hours() {
        let appearance = estimator.evaluate_at(hour, 355).unwrap();
        if daylight.is_daytime(hour) {
            assert_eq!(appearance.hue_shift(), 0.0);
            continue;
        }
        assert_eq!(appearance.sun_opacity(), 0.0);
        assert_eq!(appearance.hue_shift(), tuning.night_hue);
        assert_ne!(appearance.hue_shift(), 0.0);
        assert_eq!(appearance.brightness(), tuning.night_brightness);
    }
}

#[test]
fn test_background_bands_partition_the_day() {
    let bands = BandSet::default();
    for hour in sample_hours() {
        let matching = bands.bands().iter().filter(|b| b.contains(hour)).count();
        assert_eq!(matching, 1, "{hour}h matched {matching} bands");
    }

    for boundary in [2.0, 6.0, 10.0, 14.0, 18.0, 22.0] {
        assert_eq!(bands.select(boundary).start_hour(), boundary);
    }

    let images: Vec<&str> = bands.bands().iter().map(Band::image).collect();
    let mut unique = images.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 6);
}

#[test]
fn test_background_follows_clock_not_daylight() {
    let estimator = SkyEstimator::default();
    // 07:00 is daytime in June and night in December, same image either way
    let june = estimator.evaluate_at(7.0, 172).unwrap();
    let december = estimator.evaluate_at(7.0, 355).unwrap();
    assert!(june.is_daytime());
    assert!(!december.is_daytime());
    assert_eq!(june.background(), december.background());
}

#[test]
fn test_custom_bands() {
    let bands = BandSet::new(vec![
        Band::new(7.0, 19.0, "day.png").unwrap(),
        Band::new(19.0, 7.0, "night.png").unwrap(),
    ])
    .unwrap();
    let config = SkyConfig::default().with_bands(bands);
    let estimator = SkyEstimator::new(config).unwrap();

    assert_eq!(estimator.evaluate_at(6.99, 100).unwrap().background(), "night.png");
    assert_eq!(estimator.evaluate_at(7.0, 100).unwrap().background(), "day.png");
    assert_eq!(estimator.evaluate_at(19.0, 100).unwrap().background(), "night.png");
}

#[test]
fn test_evaluation_is_idempotent() {
    let estimator = SkyEstimator::default();
    for hour in [0.0, 5.25, 12.0, 17.9, 23.99] {
        let first = estimator.evaluate_at(hour, 200).unwrap();
        let second = estimator.evaluate_at(hour, 200).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.brightness().to_bits(), second.brightness().to_bits());
        assert_eq!(first.style_properties(), second.style_properties());
    }
}
