use std::sync::Arc;
use std::thread;

use daylight_almanac::cache::SolarCache;
use daylight_almanac::sunrise::sunrise_sunset;
use daylight_almanac::types::{CalendarDate, Coordinate};

fn june_21() -> CalendarDate {
    CalendarDate::new(2024, 6, 21).unwrap()
}

#[test]
fn test_cache_hit_returns_same_result() {
    let cache = SolarCache::new(2);
    let coordinate = Coordinate::new(40.71, -74.01).unwrap();

    let first = cache.get_or_compute(june_21(), coordinate, -4);
    let second = cache.get_or_compute(june_21(), coordinate, -4);
    assert_eq!(first, second);
    assert_eq!(first, sunrise_sunset(june_21(), coordinate, -4));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_nearby_coordinates_share_an_entry() {
    let cache = SolarCache::new(2);
    let a = Coordinate::new(40.7128, -74.0060).unwrap();
    let b = Coordinate::new(40.7131, -74.0058).unwrap();
    let rounded = Coordinate::new(40.71, -74.01).unwrap();

    let ra = cache.get_or_compute(june_21(), a, -4);
    let rb = cache.get_or_compute(june_21(), b, -4);
    assert_eq!(ra, rb);
    assert_eq!(ra, sunrise_sunset(june_21(), rounded, -4));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_distinct_keys() {
    let cache = SolarCache::new(2);
    let coordinate = Coordinate::new(51.5, 0.0).unwrap();
    cache.get_or_compute(june_21(), coordinate, 1);
    cache.get_or_compute(june_21(), coordinate, 0);
    cache.get_or_compute(CalendarDate::new(2024, 6, 22).unwrap(), coordinate, 1);
    cache.get_or_compute(june_21(), Coordinate::new(48.85, 2.35).unwrap(), 1);
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_absence_is_cached() {
    let cache = SolarCache::new(2);
    let arctic = Coordinate::new(75.0, 0.0).unwrap();
    let december = CalendarDate::new(2024, 12, 21).unwrap();
    assert!(cache.get_or_compute(december, arctic, 0).is_none());
    assert!(cache.get_or_compute(december, arctic, 0).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_retain_date_and_clear() {
    let cache = SolarCache::default();
    let coordinate = Coordinate::new(40.71, -74.01).unwrap();
    let tomorrow = CalendarDate::new(2024, 6, 22).unwrap();
    cache.get_or_compute(june_21(), coordinate, -4);
    cache.get_or_compute(tomorrow, coordinate, -4);
    assert_eq!(cache.len(), 2);

    cache.retain_date(tomorrow);
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_shared_across_threads() {
    let cache = Arc::new(SolarCache::new(3));
    let coordinate = Coordinate::new(-33.87, 151.21).unwrap();
    let expected = sunrise_sunset(june_21(), coordinate, 10);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get_or_compute(june_21(), coordinate, 10))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(cache.len(), 1);
}
