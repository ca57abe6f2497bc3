//! Seasonal sanity checks for the sunrise/sunset approximation.

use sky_clock::{solar, Daylight, SkyEstimator};

const SEATTLE: f64 = 47.6062;

#[test]
fn test_every_day_has_sunrise_before_noon_before_sunset() {
    for day_of_year in 1..=366 {
        let daylight = solar::daylight(day_of_year, SEATTLE).unwrap();
        let Daylight::RegularDay {
            sunrise,
            noon,
            sunset,
        } = daylight
        else {
            panic!("expected a regular day on day {day_of_year}, got {daylight:?}");
        };

        assert!(sunrise < noon, "day {day_of_year}: sunrise {sunrise} >= noon");
        assert!(noon < sunset, "day {day_of_year}: sunset {sunset} <= noon");
        assert_eq!(noon, solar::SOLAR_NOON);

        let span = sunset - sunrise;
        assert!(
            (8.0..16.0).contains(&span),
            "day {day_of_year}: daylight span {span:.2}h outside the seasonal bound"
        );
    }
}

#[test]
fn test_june_solstice() {
    let daylight = solar::daylight(172, SEATTLE).unwrap();

    // ~04:07 and ~19:53 local solar time
    assert!((daylight.sunrise().unwrap() - 4.109).abs() < 0.01);
    assert!((daylight.sunset().unwrap() - 19.891).abs() < 0.01);
    assert!((daylight.length() - 15.78).abs() < 0.01);
}

#[test]
fn test_december_solstice() {
    let daylight = solar::daylight(355, SEATTLE).unwrap();

    assert!((daylight.sunrise().unwrap() - 7.891).abs() < 0.01);
    assert!((daylight.sunset().unwrap() - 16.109).abs() < 0.01);
    assert!((daylight.length() - 8.22).abs() < 0.01);
}

#[test]
fn test_equinoxes_are_close_to_twelve_hours() {
    for day_of_year in [80, 266] {
        let length = solar::daylight(day_of_year, SEATTLE).unwrap().length();
        assert!((length - 12.0).abs() < 0.2, "day {day_of_year}: {length}");
    }
}

#[test]
fn test_longest_and_shortest_days() {
    let lengths: Vec<(u32, f64)> = (1..=366)
        .map(|day| (day, solar::daylight(day, SEATTLE).unwrap().length()))
        .collect();

    let longest = lengths
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    let shortest = lengths
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();

    assert_eq!(longest.0, 172);
    assert_eq!(shortest.0, 355);
}

#[test]
fn test_polar_fallback_across_latitudes() {
    // Every latitude, every day: a total result with no NaNs leaking out
    for latitude in (-90..=90).step_by(5) {
        let latitude = f64::from(latitude);
        for day_of_year in (1..=366).step_by(7) {
            let daylight = solar::daylight(day_of_year, latitude).unwrap();
            match daylight {
                Daylight::RegularDay {
                    sunrise, sunset, ..
                } => {
                    assert!(sunrise.is_finite() && sunset.is_finite());
                    assert!(sunrise <= solar::SOLAR_NOON && solar::SOLAR_NOON <= sunset);
                }
                Daylight::AllDay { .. } | Daylight::AllNight { .. } => {
                    assert!(latitude.abs() > 60.0, "polar result at {latitude}°");
                }
            }
        }
    }
}

#[test]
fn test_estimator_uses_same_daylight() {
    let estimator = SkyEstimator::default();
    for day_of_year in [1, 100, 200, 300, 366] {
        assert_eq!(
            estimator.daylight(day_of_year).unwrap(),
            solar::daylight(day_of_year, SEATTLE).unwrap()
        );
    }
}
