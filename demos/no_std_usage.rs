//! Example using only the numeric API.
//!
//! Nothing here needs `std` or `chrono`: callers that keep their own clock pass a
//! decimal hour and an ordinal day directly.

use sky_clock::{Appearance, BandSet, Daylight, Tuning, solar};

fn main() {
    let latitude = 64.1466; // Reykjavík
    let bands = BandSet::default();
    let tuning = Tuning::subtle();

    for day_of_year in [1, 80, 172, 355] {
        let daylight = solar::daylight(day_of_year, latitude).expect("valid inputs");

        match daylight {
            Daylight::RegularDay {
                sunrise, sunset, ..
            } => println!(
                "day {day_of_year:>3}: {sunrise:.2}h - {sunset:.2}h ({:.1}h)",
                daylight.length()
            ),
            Daylight::AllDay { .. } => println!("day {day_of_year:>3}: sun never sets"),
            Daylight::AllNight { .. } => println!("day {day_of_year:>3}: sun never rises"),
        }

        let noon = Appearance::compute(&daylight, 12.0, &bands, &tuning);
        println!(
            "    noon: brightness {:.2}, opacity {:.2}",
            noon.brightness(),
            noon.sun_opacity()
        );
    }
}
