use chrono::{Local, TimeZone};
use chrono_tz::America::New_York;
use tracing_subscriber::EnvFilter;

use daylight_almanac::{
    format_countdown, format_daylight, format_event, format_hours, format_percent, Coordinate,
    DayProgress, DisplaySettings, SolarCache, SolarDay,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = DisplaySettings::default();
    let cache = SolarCache::new(settings.coordinate_precision);

    let places = [
        ("New York", Coordinate::new(40.7128, -74.0060)?),
        ("Reykjavik", Coordinate::new(64.1466, -21.9426)?),
        ("Longyearbyen", Coordinate::new(78.2232, 15.6267)?),
    ];

    println!("=== Sunrise / Sunset ===");
    for date in [(2024, 6, 21), (2024, 12, 21)] {
        let dt = New_York.with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0).unwrap();
        println!("{}", dt.date_naive());
        for (name, coordinate) in &places {
            let day = SolarDay::for_datetime_cached(&dt, *coordinate, &cache);
            let result = day.as_ref().map(|d| d.result());
            let daylight = day
                .as_ref()
                .map_or_else(|| "--".to_string(), |d| format_daylight(d.daylight()));
            println!(
                "  {:<13} rise {}  set {}  daylight {}",
                name,
                format_event(result.map(|r| r.sunrise_hours)),
                format_event(result.map(|r| r.sunset_hours)),
                daylight,
            );
        }
    }
    println!("({} cached entries)", cache.len());
    println!();

    let now = Local::now();
    if let Some(progress) = DayProgress::at(&now) {
        let (h, m, s) = progress.clock_components(&settings);
        println!("=== Today ===");
        println!(
            "{}: {}",
            settings.progress_label(),
            format_countdown(h, m, s, settings.show_seconds)
        );
        if settings.show_percent_complete {
            println!("{}", format_percent(progress.percent_complete()));
        }
    }
    if let Some(day) = SolarDay::now(places[0].1) {
        println!(
            "New York (local clock): rise {}  set {}",
            format_hours(day.result().sunrise_hours),
            format_hours(day.result().sunset_hours)
        );
    }

    Ok(())
}
