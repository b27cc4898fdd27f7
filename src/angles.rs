pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Zenith at the rise/set threshold: 90° plus refraction and the solar radius.
pub const ZENITH_OFFICIAL: f64 = 90.833;

pub const MEAN_ANOMALY_RATE: f64 = 0.9856;
pub const MEAN_ANOMALY_OFFSET: f64 = 3.289;
pub const EQUATION_OF_CENTER_1: f64 = 1.916;
pub const EQUATION_OF_CENTER_2: f64 = 0.020;
pub const PERIHELION_LONGITUDE: f64 = 282.634;
pub const COS_OBLIQUITY: f64 = 0.91764;
pub const SIN_OBLIQUITY: f64 = 0.39782;
pub const SIDEREAL_RATE: f64 = 0.06571;
pub const SIDEREAL_OFFSET: f64 = 6.622;

/// Evaluated left to right as `deg * PI / 180`; published almanac outputs depend on that rounding.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

pub fn sin_deg(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn tan_deg(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

pub fn asin_deg(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn acos_deg(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn atan_deg(x: f64) -> f64 {
    rad_to_deg(x.atan())
}

fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    // rem_euclid rounds -1e-20 up to exactly `modulus`
    if r >= modulus {
        0.0
    } else {
        r
    }
}

pub fn normalize_angle(angle: f64) -> f64 {
    wrap(angle, 360.0)
}

pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// Almanac day-of-year approximation.
///
/// The leap correction counts every year divisible by four as a leap year,
/// so 1900 and 2100 come out one day high after February.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let (year, month, day) = (year as f64, month as f64, day as f64);
    let n1 = (275.0 * month / 9.0).floor();
    let n2 = ((month + 9.0) / 12.0).floor();
    let n3 = 1.0 + ((year - 4.0 * (year / 4.0).floor() + 2.0) / 3.0).floor();
    (n1 - n2 * n3 + day - 30.0) as i32
}
