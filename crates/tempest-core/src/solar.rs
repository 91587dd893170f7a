//! Solar geometry: declination and sunrise/sunset times.
//!
//! Earth-like axial tilt over an idealized 360-day year with day 0 at the
//! spring equinox. Used only for diurnal temperature shaping; accuracy
//! beyond the hour-angle model is not needed.

use std::f64::consts::{PI, TAU};

/// Axial tilt in degrees.
pub const AXIAL_TILT_DEG: f64 = 23.44;

/// Idealized year length; day 0 = spring equinox.
pub const DAYS_PER_YEAR: u32 = 360;

/// Default solar noon hour used by the grid.
pub const SOLAR_NOON_HOUR: f64 = 12.0;

/// Solar declination in radians for a day of the 360-day year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    let tilt = AXIAL_TILT_DEG.to_radians();
    let phase = TAU * f64::from(day_of_year % DAYS_PER_YEAR) / f64::from(DAYS_PER_YEAR);
    (tilt.sin() * phase.sin()).asin()
}

/// Sunrise/sunset hours and day length for one latitude and day.
///
/// During polar night `sunrise`/`sunset` are NaN and `day_length` is 0;
/// during midnight sun they are 0/24 and `day_length` is 24.
#[derive(Debug, Clone, Copy)]
pub struct SunTimes {
    pub sunrise: f64,
    pub sunset: f64,
    pub day_length: f64,
}

impl SunTimes {
    pub fn is_polar_night(&self) -> bool {
        self.day_length <= 0.0
    }

    pub fn is_midnight_sun(&self) -> bool {
        self.day_length >= 24.0
    }

    /// True when the sun actually rises and sets.
    pub fn has_day_night_cycle(&self) -> bool {
        self.day_length > 0.0 && self.day_length < 24.0
    }
}

/// Hour-angle sunrise/sunset model.
///
/// `cos H0 = −tan φ · tan δ`; `cos H0 ≥ 1` means the sun never rises,
/// `cos H0 ≤ −1` means it never sets. Otherwise the day spans
/// `24·H0/π` hours symmetric about `solar_noon_hour`, with sunrise and
/// sunset normalized into `[0, 24)`.
pub fn compute_sunrise_sunset(lat_deg: f64, day_of_year: u32, solar_noon_hour: f64) -> SunTimes {
    let phi = lat_deg.to_radians();
    let delta = solar_declination(day_of_year);
    let cos_h0 = -phi.tan() * delta.tan();

    if cos_h0 >= 1.0 {
        // Polar night.
        SunTimes {
            sunrise: f64::NAN,
            sunset: f64::NAN,
            day_length: 0.0,
        }
    } else if cos_h0 <= -1.0 {
        // Midnight sun.
        SunTimes {
            sunrise: 0.0,
            sunset: 24.0,
            day_length: 24.0,
        }
    } else {
        let h0 = cos_h0.acos();
        let day_length = 24.0 * h0 / PI;
        SunTimes {
            sunrise: (solar_noon_hour - day_length / 2.0).rem_euclid(24.0),
            sunset: (solar_noon_hour + day_length / 2.0).rem_euclid(24.0),
            day_length,
        }
    }
}
