#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display preferences for a day-progress clock.
///
/// These belong to the presentation layer; the sunrise calculation never
/// reads them. `coordinate_precision` sets how many decimal places of
/// latitude/longitude [`crate::SolarCache`] keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplaySettings {
    pub show_sunrise_sunset: bool,
    pub show_percent_complete: bool,
    pub show_seconds: bool,
    pub show_time_elapsed: bool,
    pub coordinate_precision: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_sunrise_sunset: true,
            show_percent_complete: true,
            show_seconds: true,
            show_time_elapsed: false,
            coordinate_precision: 2,
        }
    }
}

impl DisplaySettings {
    /// Heading for the count-up or countdown that `show_time_elapsed` selects.
    pub fn progress_label(&self) -> &'static str {
        if self.show_time_elapsed {
            "Time Elapsed Today"
        } else {
            "Time Remaining Today"
        }
    }
}
