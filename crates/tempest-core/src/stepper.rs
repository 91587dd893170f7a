//! Biased-random-walk primitives for band values.
//!
//! Two differently tuned walks: [`step_band`] pulls the global base weather
//! toward a regime target with tunable volatility; [`drift_component`]
//! pulls a per-cell value toward its (biome-adjusted) base with a small
//! chance of a random jump. Both move at most one band per call and always
//! clamp the result.

use crate::rng::UnitRng;

/// One biased step of a band value toward `target`.
///
/// Draws once; if the draw exceeds `volatility` the value mostly holds,
/// moving one band toward the target only on draws above 0.9. Draws at or
/// below `volatility` take a second draw for an undirected wobble:
/// `<0.33` down, `>0.66` up, otherwise hold. One draw guaranteed, a second
/// only in the volatility window.
pub fn step_band(
    current: i32,
    min: i32,
    max: i32,
    target: i32,
    volatility: f64,
    rng: &mut dyn UnitRng,
) -> i32 {
    let dir = (target - current).signum();
    let r = rng.next_unit();

    let stepped = if r > volatility {
        if r > 0.9 && dir != 0 {
            current + dir
        } else {
            current
        }
    } else {
        let r2 = rng.next_unit();
        if r2 < 0.33 {
            current - 1
        } else if r2 > 0.66 {
            current + 1
        } else {
            current
        }
    };

    stepped.clamp(min, max)
}

/// Per-cell drift toward a base value.
///
/// 70% of draws move one band toward `base`, draws in `[0.7, 0.9)` hold,
/// and draws in `[0.9, 1.0)` jump ±1 at random (second draw, 50/50).
pub fn drift_component(
    value: i32,
    base: i32,
    min: i32,
    max: i32,
    rng: &mut dyn UnitRng,
) -> i32 {
    let r = rng.next_unit();

    let stepped = if r < 0.7 {
        value + (base - value).signum()
    } else if r < 0.9 {
        value
    } else if rng.next_unit() < 0.5 {
        value - 1
    } else {
        value + 1
    };

    stepped.clamp(min, max)
}
