//! Macro weather regimes: a discrete Markov chain biasing all per-tick
//! targets.
//!
//! Exactly one regime is active per grid at a time; one transition draw
//! happens per tick. Each regime maps to fixed sky/precipitation/wind-force
//! targets and a ±1 temperature nudge.

use serde::{Deserialize, Serialize};

use crate::rng::UnitRng;
use crate::state::{precip, sky, temp, wind};

/// Macro climate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherRegime {
    Fair,
    Unsettled,
    Stormy,
    Heatwave,
    ColdSnap,
}

impl Default for WeatherRegime {
    fn default() -> Self {
        WeatherRegime::Fair
    }
}

/// Advance the regime chain by one tick. Exactly one RNG draw per call.
///
/// Cumulative thresholds on the draw `r ∈ [0, 1)`:
/// - Fair:      <0.90 Fair, <0.93 Unsettled, <0.96 Heatwave,
///   <0.99 ColdSnap, else Stormy.
/// - Unsettled: <0.90 Unsettled, <0.95 Fair, else Stormy.
/// - Stormy:    <0.90 Stormy, <0.98 Unsettled, else Fair.
/// - Heatwave / ColdSnap: <0.98 unchanged, else Fair.
pub fn step_regime(prev: WeatherRegime, rng: &mut dyn UnitRng) -> WeatherRegime {
    use WeatherRegime::*;
    let r = rng.next_unit();
    match prev {
        Fair => {
            if r < 0.90 {
                Fair
            } else if r < 0.93 {
                Unsettled
            } else if r < 0.96 {
                Heatwave
            } else if r < 0.99 {
                ColdSnap
            } else {
                Stormy
            }
        }
        Unsettled => {
            if r < 0.90 {
                Unsettled
            } else if r < 0.95 {
                Fair
            } else {
                Stormy
            }
        }
        Stormy => {
            if r < 0.90 {
                Stormy
            } else if r < 0.98 {
                Unsettled
            } else {
                Fair
            }
        }
        Heatwave => {
            if r < 0.98 {
                Heatwave
            } else {
                Fair
            }
        }
        ColdSnap => {
            if r < 0.98 {
                ColdSnap
            } else {
                Fair
            }
        }
    }
}

impl WeatherRegime {
    /// Sky-cover band the base weather is pulled toward.
    pub fn sky_target(self) -> i32 {
        match self {
            WeatherRegime::Fair => sky::MOSTLY_CLEAR,
            WeatherRegime::Unsettled => sky::MOSTLY_CLOUDY,
            WeatherRegime::Stormy => sky::OVERCAST,
            WeatherRegime::Heatwave => sky::CLEAR,
            WeatherRegime::ColdSnap => sky::OVERCAST,
        }
    }

    /// Precipitation band the base weather is pulled toward.
    pub fn precip_target(self) -> i32 {
        match self {
            WeatherRegime::Fair | WeatherRegime::Heatwave => precip::NONE,
            WeatherRegime::Unsettled | WeatherRegime::ColdSnap => precip::LIGHT,
            WeatherRegime::Stormy => precip::HEAVY,
        }
    }

    /// Wind-force band the base weather is pulled toward.
    pub fn wind_force_target(self) -> i32 {
        match self {
            WeatherRegime::Fair => wind::LIGHT_BREEZE,
            WeatherRegime::Unsettled => wind::MODERATE_BREEZE,
            WeatherRegime::Stormy => wind::GALE,
            WeatherRegime::Heatwave => wind::LIGHT_AIR,
            WeatherRegime::ColdSnap => wind::FRESH_BREEZE,
        }
    }

    /// Nudge the latitudinal baseline band by the regime's temperature
    /// bias: Heatwave +1 capped at FURNACE, ColdSnap −1 floored at FRIGID.
    pub fn temp_target(self, baseline: i32) -> i32 {
        match self {
            WeatherRegime::Heatwave => (baseline + 1).min(temp::FURNACE),
            WeatherRegime::ColdSnap => (baseline - 1).max(temp::FRIGID),
            _ => baseline,
        }
    }
}
