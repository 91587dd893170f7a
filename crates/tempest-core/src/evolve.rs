//! Per-tick evolution of the base weather and of individual cells.
//!
//! Draw order is fixed and documented because determinism under a seeded
//! RNG is part of the engine's contract:
//!   base: temp, sky, precip, wind_force, wind_dir.
//!   cell: sky, temp, wind_force, precip (wind_dir is left to the vector
//!   smoother).

use crate::climate::baseline_temp_band;
use crate::regime::WeatherRegime;
use crate::rng::UnitRng;
use crate::state::{Channel, Season, WeatherState, WIND_DIR_COUNT};
use crate::stepper::{drift_component, step_band};

const TEMP_VOLATILITY: f64 = 0.3;
const SKY_VOLATILITY: f64 = 0.4;
const PRECIP_VOLATILITY: f64 = 0.4;
const WIND_FORCE_VOLATILITY: f64 = 0.3;

/// Evolve the grid-wide base weather by one tick. Does not mutate `prev`.
pub fn step_base_weather(
    prev: &WeatherState,
    lat_deg: f64,
    season: Season,
    regime: WeatherRegime,
    rng: &mut dyn UnitRng,
) -> WeatherState {
    let temp_target = regime.temp_target(baseline_temp_band(lat_deg, season));

    let (temp_min, temp_max) = Channel::Temp.bounds();
    let temp = step_band(prev.temp, temp_min, temp_max, temp_target, TEMP_VOLATILITY, rng);

    let (sky_min, sky_max) = Channel::Sky.bounds();
    let sky = step_band(prev.sky, sky_min, sky_max, regime.sky_target(), SKY_VOLATILITY, rng);

    let (pr_min, pr_max) = Channel::Precip.bounds();
    let precip = step_band(
        prev.precip,
        pr_min,
        pr_max,
        regime.precip_target(),
        PRECIP_VOLATILITY,
        rng,
    );

    let (wf_min, wf_max) = Channel::WindForce.bounds();
    let wind_force = step_band(
        prev.wind_force,
        wf_min,
        wf_max,
        regime.wind_force_target(),
        WIND_FORCE_VOLATILITY,
        rng,
    );

    // Independent slow walk of the compass index, wrapping mod 8.
    let r = rng.next_unit();
    let wind_dir = if r < 0.2 {
        (prev.wind_dir + WIND_DIR_COUNT - 1) % WIND_DIR_COUNT
    } else if r > 0.8 {
        (prev.wind_dir + 1) % WIND_DIR_COUNT
    } else {
        prev.wind_dir
    };

    WeatherState {
        sky,
        temp,
        wind_dir,
        wind_force,
        precip,
    }
}

/// Evolve one cell by one tick: drift each scalar channel toward the
/// biome-adjusted base, then apply the diurnal temperature delta, clamped.
/// Wind direction passes through untouched (smoothed later in vector
/// space). Does not mutate `prev`.
pub fn step_cell(
    prev: &WeatherState,
    biome_base: &WeatherState,
    diurnal_delta: i32,
    rng: &mut dyn UnitRng,
) -> WeatherState {
    let mut next = *prev;
    for ch in [Channel::Sky, Channel::Temp, Channel::WindForce, Channel::Precip] {
        let (min, max) = ch.bounds();
        let drifted = drift_component(prev.channel(ch), biome_base.channel(ch), min, max, rng);
        next.set_channel(ch, drifted);
    }
    next.set_channel(Channel::Temp, next.temp + diurnal_delta);
    next
}
