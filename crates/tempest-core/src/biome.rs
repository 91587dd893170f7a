//! Per-biome offsets and diurnal temperature shaping.
//!
//! Biome profiles are static per-biome-id records applied atop the global
//! base weather before per-cell drift. Diurnal shaping turns the injected
//! calendar's (day, hour) into an integer temperature-band delta via the
//! solar model.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::state::{Channel, WeatherState};
use crate::solar::SunTimes;

/// Static weather offsets for one biome id. Every field is optional;
/// an absent field leaves the corresponding channel untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomeWeatherProfile {
    /// Additive temperature-band offset.
    pub temp_offset: Option<i32>,
    /// Additive precipitation-band offset.
    pub precip_offset: Option<i32>,
    /// Additive sky-cover-band offset.
    pub cloudiness_offset: Option<i32>,
    /// Additive wind-force-band offset.
    pub storminess_offset: Option<i32>,
    /// Scales the diurnal temperature swing (default 1.0).
    pub diurnal_temp_amplitude: Option<f64>,
    /// Extra pre-dawn cooling in bands, ramping in over the last 4 h of
    /// night (default 0 = disabled).
    pub diurnal_night_bias: Option<f64>,
}

/// Apply a biome's offsets to the base weather.
///
/// No profile means the unmodified base. Each defined offset is applied
/// additively and clamped to its channel's range; wind direction is never
/// biome-adjusted.
pub fn adjust_base_for_biome(
    base: WeatherState,
    profile: Option<&BiomeWeatherProfile>,
) -> WeatherState {
    let Some(p) = profile else {
        return base;
    };

    let mut out = base;
    if let Some(dt) = p.temp_offset {
        out.set_channel(Channel::Temp, base.temp + dt);
    }
    if let Some(dp) = p.precip_offset {
        out.set_channel(Channel::Precip, base.precip + dp);
    }
    if let Some(dc) = p.cloudiness_offset {
        out.set_channel(Channel::Sky, base.sky + dc);
    }
    if let Some(ds) = p.storminess_offset {
        out.set_channel(Channel::WindForce, base.wind_force + ds);
    }
    out
}

/// Duration of the pre-dawn cooling ramp in hours.
const NIGHT_BIAS_WINDOW_H: f64 = 4.0;

/// Thermal lag between solar noon and the daily temperature peak, hours.
const THERMAL_LAG_H: f64 = 2.0;

/// Diurnal temperature offset in integer bands.
///
/// Amplitude scales with day length (`0.5 + 0.5·dayLength/24`, so polar
/// night halves the swing and midnight sun keeps it full) and the profile's
/// amplitude factor. The swing is a cosine peaking two hours after solar
/// noon. A positive `diurnal_night_bias` adds extra cooling that ramps
/// linearly from zero four hours before sunrise to the full bias at
/// sunrise, only where a genuine day/night cycle exists.
pub fn diurnal_temp_offset(
    sun: &SunTimes,
    hour: f64,
    solar_noon_hour: f64,
    profile: Option<&BiomeWeatherProfile>,
) -> i32 {
    let amp_factor = profile
        .and_then(|p| p.diurnal_temp_amplitude)
        .unwrap_or(1.0);
    let amplitude = amp_factor * (0.5 + 0.5 * sun.day_length / 24.0);

    let peak = solar_noon_hour + THERMAL_LAG_H;
    let mut offset = amplitude * (TAU * (hour - peak) / 24.0).cos();

    let night_bias = profile.and_then(|p| p.diurnal_night_bias).unwrap_or(0.0);
    if night_bias > 0.0 && sun.has_day_night_cycle() {
        let until_sunrise = (sun.sunrise - hour).rem_euclid(24.0);
        if until_sunrise < NIGHT_BIAS_WINDOW_H {
            offset -= night_bias * (1.0 - until_sunrise / NIGHT_BIAS_WINDOW_H);
        }
    }

    offset.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::{compute_sunrise_sunset, SOLAR_NOON_HOUR};
    use crate::state::{precip, sky, temp, wind};

    fn profile(
        temp_offset: i32,
        precip_offset: i32,
        cloudiness_offset: i32,
        storminess_offset: i32,
    ) -> BiomeWeatherProfile {
        BiomeWeatherProfile {
            temp_offset: Some(temp_offset),
            precip_offset: Some(precip_offset),
            cloudiness_offset: Some(cloudiness_offset),
            storminess_offset: Some(storminess_offset),
            ..Default::default()
        }
    }

    #[test]
    fn no_profile_returns_base_unchanged() {
        let base = WeatherState::mild(temp::WARM);
        assert_eq!(adjust_base_for_biome(base, None), base);
    }

    #[test]
    fn offsets_apply_to_matching_channels() {
        let base = WeatherState::mild(temp::COOL);
        let p = profile(1, 2, 1, 3);
        let out = adjust_base_for_biome(base, Some(&p));
        assert_eq!(out.temp, temp::MILD);
        assert_eq!(out.precip, precip::LIGHT);
        assert_eq!(out.sky, sky::MOSTLY_CLOUDY);
        assert_eq!(out.wind_force, wind::FRESH_BREEZE);
        assert_eq!(out.wind_dir, base.wind_dir, "wind_dir is never biome-adjusted");
    }

    #[test]
    fn offsets_clamp_individually() {
        let base = WeatherState {
            sky: sky::OBSCURED,
            temp: temp::FRIGID,
            wind_dir: 0,
            wind_force: wind::HURRICANE,
            precip: precip::NONE,
        };
        let p = profile(-5, -5, 5, 5);
        let out = adjust_base_for_biome(base, Some(&p));
        assert_eq!(out.temp, temp::FRIGID);
        assert_eq!(out.precip, precip::NONE);
        assert_eq!(out.sky, sky::OBSCURED);
        assert_eq!(out.wind_force, wind::HURRICANE);
    }

    #[test]
    fn partial_profile_touches_only_defined_fields() {
        let base = WeatherState::mild(temp::COOL);
        let p = BiomeWeatherProfile {
            precip_offset: Some(2),
            ..Default::default()
        };
        let out = adjust_base_for_biome(base, Some(&p));
        assert_eq!(out.precip, precip::LIGHT);
        assert_eq!(out.temp, base.temp);
        assert_eq!(out.sky, base.sky);
        assert_eq!(out.wind_force, base.wind_force);
    }

    #[test]
    fn afternoon_warmer_than_predawn() {
        let sun = compute_sunrise_sunset(45.0, 45, SOLAR_NOON_HOUR);
        let p = BiomeWeatherProfile {
            diurnal_temp_amplitude: Some(2.0),
            ..Default::default()
        };
        let afternoon = diurnal_temp_offset(&sun, 14.0, SOLAR_NOON_HOUR, Some(&p));
        let predawn = diurnal_temp_offset(&sun, 2.0, SOLAR_NOON_HOUR, Some(&p));
        assert!(
            afternoon > predawn,
            "afternoon {afternoon} should exceed pre-dawn {predawn}"
        );
        assert!(afternoon > 0, "peak-hour offset should warm: {afternoon}");
        assert!(predawn < 0, "pre-dawn offset should cool: {predawn}");
    }

    #[test]
    fn night_bias_deepens_predawn_cooling() {
        let sun = compute_sunrise_sunset(45.0, 45, SOLAR_NOON_HOUR);
        assert!(sun.has_day_night_cycle());
        let hour = sun.sunrise - 0.5;

        let plain = BiomeWeatherProfile {
            diurnal_temp_amplitude: Some(2.0),
            ..Default::default()
        };
        let biased = BiomeWeatherProfile {
            diurnal_temp_amplitude: Some(2.0),
            diurnal_night_bias: Some(2.0),
            ..Default::default()
        };
        let without = diurnal_temp_offset(&sun, hour, SOLAR_NOON_HOUR, Some(&plain));
        let with = diurnal_temp_offset(&sun, hour, SOLAR_NOON_HOUR, Some(&biased));
        assert!(
            with < without,
            "night bias should cool further: {with} vs {without}"
        );
    }

    #[test]
    fn night_bias_inactive_outside_predawn_window() {
        let sun = compute_sunrise_sunset(45.0, 45, SOLAR_NOON_HOUR);
        let biased = BiomeWeatherProfile {
            diurnal_night_bias: Some(3.0),
            ..Default::default()
        };
        let plain = BiomeWeatherProfile::default();
        // Midday is far from the pre-dawn window.
        let with = diurnal_temp_offset(&sun, 13.0, SOLAR_NOON_HOUR, Some(&biased));
        let without = diurnal_temp_offset(&sun, 13.0, SOLAR_NOON_HOUR, Some(&plain));
        assert_eq!(with, without);
    }

    #[test]
    fn night_bias_skipped_during_polar_night() {
        let sun = compute_sunrise_sunset(80.0, 270, SOLAR_NOON_HOUR);
        assert!(sun.is_polar_night());
        let biased = BiomeWeatherProfile {
            diurnal_night_bias: Some(5.0),
            ..Default::default()
        };
        // Sunrise is NaN; the cycle guard must keep the bias out entirely.
        let offset = diurnal_temp_offset(&sun, 5.0, SOLAR_NOON_HOUR, Some(&biased));
        let plain = diurnal_temp_offset(&sun, 5.0, SOLAR_NOON_HOUR, None);
        assert_eq!(offset, plain);
    }

    #[test]
    fn polar_night_halves_amplitude() {
        let polar = compute_sunrise_sunset(80.0, 270, SOLAR_NOON_HOUR);
        let midnight_sun = compute_sunrise_sunset(80.0, 90, SOLAR_NOON_HOUR);
        let p = BiomeWeatherProfile {
            diurnal_temp_amplitude: Some(4.0),
            ..Default::default()
        };
        // At the thermal peak the cosine is 1, so the offset is the amplitude.
        let dim = diurnal_temp_offset(&polar, 14.0, SOLAR_NOON_HOUR, Some(&p));
        let full = diurnal_temp_offset(&midnight_sun, 14.0, SOLAR_NOON_HOUR, Some(&p));
        assert_eq!(dim, 2);
        assert_eq!(full, 4);
    }
}
