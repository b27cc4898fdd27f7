use chrono::Duration;

/// Shown in place of a time that could not be computed.
pub const PLACEHOLDER: &str = "--:--";

/// `(hour, minute)` of a clock time given in hours since midnight. Minutes
/// are rounded down. `None` for NaN or infinite input.
pub fn hours_to_clock(hours: f64) -> Option<(u32, u32)> {
    if !hours.is_finite() {
        return None;
    }
    let total_minutes = (crate::angles::normalize_hours(hours) * 60.0).floor() as u32;
    Some(((total_minutes / 60) % 24, total_minutes % 60))
}

/// 24-hour `HH:MM`, or [`PLACEHOLDER`] for non-finite input.
pub fn format_hours(hours: f64) -> String {
    match hours_to_clock(hours) {
        Some((h, m)) => format!("{:02}:{:02}", h, m),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_event(hours: Option<f64>) -> String {
    hours.map_or_else(|| PLACEHOLDER.to_string(), format_hours)
}

/// Daylight span as `"{h}h {m}m"`.
pub fn format_daylight(daylight: Duration) -> String {
    let minutes = daylight.num_minutes();
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn format_countdown(hours: i64, minutes: i64, seconds: i64, show_seconds: bool) -> String {
    if show_seconds {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", hours, minutes)
    }
}

pub fn format_percent(percent: u32) -> String {
    format!("{}% of day complete", percent)
}
