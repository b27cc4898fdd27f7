//! Wall-clock glue between `chrono` date-times and the almanac calculation.

use chrono::{DateTime, Duration, Local, NaiveDate, Offset, TimeZone};

use crate::cache::SolarCache;
use crate::config::DisplaySettings;
use crate::sunrise;
use crate::types::{CalendarDate, Coordinate, SolarResult};

/// The UTC offset of `dt` in whole hours, truncated toward zero.
///
/// Half-hour and 45-minute zones lose their fraction (+05:30 becomes 5).
pub fn whole_hour_offset<Tz: TimeZone>(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc() / 3600
}

/// First valid local instant of `date`. If local midnight is skipped by a
/// DST transition, the first instant after the gap is used.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    (0..=4)
        .map(|step| midnight + Duration::minutes(30 * step))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
}

fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Sunrise and sunset for the local calendar day containing a date-time.
#[derive(Debug, Clone)]
pub struct SolarDay<Tz: TimeZone> {
    result: SolarResult,
    start_of_day: DateTime<Tz>,
}

impl<Tz: TimeZone> SolarDay<Tz> {
    /// Returns `None` when the sun does not rise or set on that day.
    pub fn for_datetime(dt: &DateTime<Tz>, coordinate: Coordinate) -> Option<Self> {
        let date = CalendarDate::from(dt.date_naive());
        let result = sunrise::sunrise_sunset(date, coordinate, whole_hour_offset(dt))?;
        Self::from_result(dt, result)
    }

    /// Like [`SolarDay::for_datetime`] but served from `cache`. Entries for
    /// any other date are evicted, so a clock left running keeps one day.
    pub fn for_datetime_cached(
        dt: &DateTime<Tz>,
        coordinate: Coordinate,
        cache: &SolarCache,
    ) -> Option<Self> {
        let date = CalendarDate::from(dt.date_naive());
        cache.retain_date(date);
        let result = cache.get_or_compute(date, coordinate, whole_hour_offset(dt))?;
        Self::from_result(dt, result)
    }

    fn from_result(dt: &DateTime<Tz>, result: SolarResult) -> Option<Self> {
        let start_of_day = start_of_day(&dt.timezone(), dt.date_naive())?;
        Some(Self {
            result,
            start_of_day,
        })
    }

    pub fn result(&self) -> SolarResult {
        self.result
    }

    /// Sunrise as elapsed time since the local start of day.
    pub fn sunrise(&self) -> DateTime<Tz> {
        self.start_of_day.clone() + hours_to_duration(self.result.sunrise_hours)
    }

    pub fn sunset(&self) -> DateTime<Tz> {
        self.start_of_day.clone() + hours_to_duration(self.result.sunset_hours)
    }

    pub fn daylight(&self) -> Duration {
        hours_to_duration(self.result.daylight_hours())
    }
}

impl SolarDay<Local> {
    pub fn now(coordinate: Coordinate) -> Option<Self> {
        Self::for_datetime(&Local::now(), coordinate)
    }
}

/// Time elapsed since local midnight and remaining until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProgress {
    pub elapsed: Duration,
    pub remaining: Duration,
}

impl DayProgress {
    pub fn at<Tz: TimeZone>(dt: &DateTime<Tz>) -> Option<Self> {
        let tz = dt.timezone();
        let today = dt.date_naive();
        let start = start_of_day(&tz, today)?;
        let end = start_of_day(&tz, today.succ_opt()?)?;
        Some(Self {
            elapsed: dt.clone() - start,
            remaining: end - dt.clone(),
        })
    }

    /// Share of the local day already gone, in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        let total = (self.elapsed + self.remaining).num_milliseconds();
        if total <= 0 {
            return 0.0;
        }
        self.elapsed.num_milliseconds() as f64 / total as f64
    }

    /// Whole percent complete, rounded down.
    pub fn percent_complete(&self) -> u32 {
        (self.fraction() * 100.0) as u32
    }

    /// `(hours, minutes, seconds)` of the count-up or countdown, whichever
    /// `settings` selects.
    pub fn clock_components(&self, settings: &DisplaySettings) -> (i64, i64, i64) {
        let span = if settings.show_time_elapsed {
            self.elapsed
        } else {
            self.remaining
        };
        (
            span.num_hours(),
            span.num_minutes() % 60,
            span.num_seconds() % 60,
        )
    }
}
