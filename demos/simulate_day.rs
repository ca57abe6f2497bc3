//! Preview every simulation preset, as selected by `?test=<name>` on the dashboard.
//!
//! Run with a query string to pick one preset:
//! `cargo run --example simulate_day -- "?test=evening"`

use sky_clock::{Preset, SkyConfig, SkyEstimator, Tuning};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let day_of_year = 100;
    let presets: Vec<Preset> = match std::env::args().nth(1) {
        Some(query) => Preset::from_query(&query).into_iter().collect(),
        None => Preset::ALL.to_vec(),
    };

    for (label, tuning) in [("vivid", Tuning::vivid()), ("subtle", Tuning::subtle())] {
        let estimator = SkyEstimator::new(SkyConfig::default().with_tuning(tuning)?)?;
        println!("== {label} ==");
        for &preset in &presets {
            let appearance = estimator.simulate(preset, day_of_year)?;
            println!(
                "{:<10} {:>5.1}h  {:<5}  opacity {:.2}  brightness {:.2}  hue {}°  {}",
                preset.name(),
                preset.hour(),
                if appearance.is_daytime() { "day" } else { "night" },
                appearance.sun_opacity(),
                appearance.brightness(),
                appearance.hue_shift(),
                appearance.background()
            );
        }
        println!();
    }

    Ok(())
}
