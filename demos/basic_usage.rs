//! Basic sky evaluation example.

use sky_clock::{SkyConfig, SkyEstimator, solar};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let estimator = SkyEstimator::new(SkyConfig::default())?;
    let day_of_year = 172; // June solstice

    let daylight = solar::daylight(day_of_year, estimator.config().latitude())?;
    println!(
        "Seattle, day {day_of_year}: sunrise {:.2}h, sunset {:.2}h ({:.1}h of daylight)",
        daylight.sunrise().unwrap_or(f64::NAN),
        daylight.sunset().unwrap_or(f64::NAN),
        daylight.length()
    );
    println!();

    for hour in [3.0, 5.0, 7.5, 12.0, 18.5, 21.0] {
        let appearance = estimator.evaluate_at(hour, day_of_year)?;
        println!("{hour:>5.1}h");
        for property in appearance.style_properties() {
            println!("    {:<16} {}", property.name, property.value);
        }
    }

    Ok(())
}
