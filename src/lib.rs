//! Sunrise and sunset times from the almanac sunrise equation, with the
//! wall-clock helpers a day-progress display needs around it.
//!
//! ```
//! use daylight_almanac::{compute, format_hours};
//!
//! // New York on the 2024 summer solstice, EDT (UTC-4)
//! let day = compute(2024, 6, 21, 40.7128, -74.0060, -4).unwrap();
//! assert_eq!(format_hours(day.sunrise_hours), "05:25");
//! assert_eq!(format_hours(day.sunset_hours), "20:30");
//!
//! // No sunrise at 75°N in late December
//! assert!(compute(2024, 12, 21, 75.0, 0.0, 0).is_none());
//! ```

pub mod angles;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod sunrise;
pub mod types;

pub use angles::{
    day_of_year, deg_to_rad, normalize_angle, normalize_hours, rad_to_deg, DEGREES_PER_HOUR,
    ZENITH_OFFICIAL,
};

pub use cache::SolarCache;

pub use clock::{start_of_day, whole_hour_offset, DayProgress, SolarDay};

pub use config::DisplaySettings;

pub use error::{Error, Result};

pub use format::{
    format_countdown, format_daylight, format_event, format_hours, format_percent,
    hours_to_clock, PLACEHOLDER,
};

pub use sunrise::{compute, event_time, sunrise_sunset};

pub use types::{CalendarDate, Coordinate, SolarEvent, SolarResult};
