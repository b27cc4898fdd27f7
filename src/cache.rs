//! Per-day memoization of sunrise/sunset results.
//!
//! A clock refreshing every second asks for the same day and place over and
//! over; the answer only changes when the date, the whole-hour offset, or the
//! rounded coordinate does.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::sunrise;
use crate::types::{CalendarDate, Coordinate, SolarResult};

const MAX_PRECISION: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    date: CalendarDate,
    latitude: i64,
    longitude: i64,
    timezone_hours: i32,
}

/// Memo of results per date, rounded coordinate and offset.
///
/// `get_or_compute` never evicts; callers that span several days call
/// [`SolarCache::retain_date`] (as [`crate::SolarDay::for_datetime_cached`]
/// does) or the map grows by one entry per day and place.
#[derive(Debug)]
pub struct SolarCache {
    scale: f64,
    entries: Mutex<HashMap<CacheKey, Option<SolarResult>>>,
}

impl SolarCache {
    /// Creates a cache keyed on coordinates rounded to `precision` decimal
    /// places (capped at 9).
    pub fn new(precision: u8) -> Self {
        Self {
            scale: 10f64.powi(i32::from(precision.min(MAX_PRECISION))),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, Option<SolarResult>>> {
        // entries are Copy values, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn key(&self, date: CalendarDate, coordinate: Coordinate, timezone_hours: i32) -> CacheKey {
        CacheKey {
            date,
            latitude: (coordinate.latitude() * self.scale).round() as i64,
            longitude: (coordinate.longitude() * self.scale).round() as i64,
            timezone_hours,
        }
    }

    /// Returns the cached result for the rounded coordinate, computing and
    /// storing it on first use. Absence is cached too.
    pub fn get_or_compute(
        &self,
        date: CalendarDate,
        coordinate: Coordinate,
        timezone_hours: i32,
    ) -> Option<SolarResult> {
        let key = self.key(date, coordinate, timezone_hours);
        if let Some(hit) = self.entries().get(&key) {
            trace!(?date, timezone_hours, "solar cache hit");
            return *hit;
        }

        trace!(?date, timezone_hours, "solar cache miss");
        let result = sunrise::compute(
            date.year,
            date.month,
            date.day,
            key.latitude as f64 / self.scale,
            key.longitude as f64 / self.scale,
            timezone_hours,
        );
        self.entries().insert(key, result);
        result
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Drops every entry that is not for `date`.
    pub fn retain_date(&self, date: CalendarDate) {
        self.entries().retain(|key, _| key.date == date);
    }
}

impl Default for SolarCache {
    fn default() -> Self {
        Self::new(crate::config::DisplaySettings::default().coordinate_precision)
    }
}
