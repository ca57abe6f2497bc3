//! Keep a backdrop in sync with the system clock.
//!
//! Evaluates on start and then on a short interval, pausing briefly the way a page
//! does when it is hidden.

use std::sync::Arc;
use std::time::Duration;

use sky_clock::SkyEstimator;
use sky_clock::schedule::RefreshSchedule;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let estimator = Arc::new(SkyEstimator::default());
    let worker_estimator = Arc::clone(&estimator);

    let schedule = RefreshSchedule::start(Duration::from_secs(1), move || {
        let appearance = worker_estimator.evaluate_now();
        let summary: Vec<String> = appearance
            .style_properties()
            .into_iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect();
        println!("{}", summary.join(" "));
    })?;

    std::thread::sleep(Duration::from_millis(3500));
    println!("-- hidden --");
    schedule.pause();
    std::thread::sleep(Duration::from_secs(2));
    println!("-- visible --");
    schedule.resume();
    std::thread::sleep(Duration::from_millis(2500));

    schedule
        .stop()
        .map_err(|_| "refresh task panicked".into())
}
