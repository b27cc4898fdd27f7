//! Sunrise and sunset from the almanac sunrise equation.
//!
//! The calculation is a pure function of its inputs. Each event is solved
//! separately from an approximate time anchored at 06:00 (rise) or 18:00
//! (set) local mean time, then shifted back to UTC and on to the caller's
//! whole-hour offset.

use tracing::debug;

use crate::angles::{
    acos_deg, atan_deg, cos_deg, day_of_year, normalize_angle, normalize_hours, sin_deg,
    tan_deg, COS_OBLIQUITY, DEGREES_PER_HOUR, EQUATION_OF_CENTER_1, EQUATION_OF_CENTER_2,
    MEAN_ANOMALY_OFFSET, MEAN_ANOMALY_RATE, PERIHELION_LONGITUDE, SIDEREAL_OFFSET, SIDEREAL_RATE,
    SIN_OBLIQUITY, ZENITH_OFFICIAL,
};
use crate::types::{CalendarDate, Coordinate, SolarEvent, SolarResult};

/// Sun's true longitude in degrees, `[0, 360)`, from its mean anomaly.
pub fn true_longitude(mean_anomaly: f64) -> f64 {
    normalize_angle(
        mean_anomaly
            + EQUATION_OF_CENTER_1 * sin_deg(mean_anomaly)
            + EQUATION_OF_CENTER_2 * sin_deg(2.0 * mean_anomaly)
            + PERIHELION_LONGITUDE,
    )
}

/// Right ascension in hours, placed in the same quadrant as `true_longitude`.
pub fn right_ascension(true_longitude: f64) -> f64 {
    let ra = normalize_angle(atan_deg(COS_OBLIQUITY * tan_deg(true_longitude)));
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR
}

/// Cosine of the local hour angle at the rise/set zenith. Values outside
/// `[-1, 1]` mean the sun stays above or below the horizon.
pub fn cos_local_hour_angle(true_longitude: f64, latitude: f64) -> f64 {
    let sin_dec = SIN_OBLIQUITY * sin_deg(true_longitude);
    let cos_dec = sin_dec.asin().cos();
    (cos_deg(ZENITH_OFFICIAL) - sin_dec * sin_deg(latitude)) / (cos_dec * cos_deg(latitude))
}

/// Local clock time of one event in hours `[0, 24)`, or `None` when the sun
/// does not cross the horizon for that event.
pub fn event_time(
    event: SolarEvent,
    day_of_year: i32,
    latitude: f64,
    longitude: f64,
    timezone_hours: i32,
) -> Option<f64> {
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = day_of_year as f64 + (event.anchor_hour() - lng_hour) / 24.0;
    let mean_anomaly = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let l = true_longitude(mean_anomaly);
    let ra = right_ascension(l);

    let cos_h = cos_local_hour_angle(l, latitude);
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let h = match event {
        SolarEvent::Sunrise => (360.0 - acos_deg(cos_h)) / DEGREES_PER_HOUR,
        SolarEvent::Sunset => acos_deg(cos_h) / DEGREES_PER_HOUR,
    };
    let local_mean_time = h + ra - SIDEREAL_RATE * t - SIDEREAL_OFFSET;
    let ut = normalize_hours(local_mean_time - lng_hour);
    Some(normalize_hours(ut + timezone_hours as f64))
}

/// Sunrise and sunset for a calendar day, as local clock hours.
///
/// `timezone_hours` is the caller's whole-hour UTC offset. Returns `None`
/// if either event does not occur (polar day or polar night); a partial
/// result is never produced.
///
/// Latitude and longitude are the caller's to keep in range; use
/// [`sunrise_sunset`] with a validated [`Coordinate`] to have that checked.
pub fn compute(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    timezone_hours: i32,
) -> Option<SolarResult> {
    let n = day_of_year(year, month, day);
    let rise = event_time(SolarEvent::Sunrise, n, latitude, longitude, timezone_hours);
    let set = event_time(SolarEvent::Sunset, n, latitude, longitude, timezone_hours);
    match (rise, set) {
        (Some(sunrise_hours), Some(sunset_hours)) => Some(SolarResult {
            sunrise_hours,
            sunset_hours,
        }),
        _ => {
            debug!(
                year,
                month,
                day,
                latitude,
                longitude,
                sunrise = rise.is_some(),
                sunset = set.is_some(),
                "sun does not cross the horizon"
            );
            None
        }
    }
}

pub fn sunrise_sunset(
    date: CalendarDate,
    coordinate: Coordinate,
    timezone_hours: i32,
) -> Option<SolarResult> {
    compute(
        date.year,
        date.month,
        date.day,
        coordinate.latitude(),
        coordinate.longitude(),
        timezone_hours,
    )
}
