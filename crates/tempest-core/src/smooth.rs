//! Spatial smoothing passes.
//!
//! Scalar channels use a 4-neighbor weighted average; wind is smoothed in
//! Cartesian (u, v) space so that averaging near the 0/7 compass wrap does
//! not collapse two nearly-north winds into a westerly.
//!
//! Every pass is double-buffered: all outputs are computed from the
//! pre-pass values before anything is written back.

use std::f64::consts::TAU;

use crate::state::{Channel, WeatherState, WIND_DIR_COUNT};

/// Default kernel weights: the cell itself counts double.
pub const DEFAULT_SELF_WEIGHT: f64 = 2.0;
pub const DEFAULT_NEIGHBOR_WEIGHT: f64 = 1.0;

/// Orthogonal neighbor offsets (N, S, W, E).
const NEIGHBORS4: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// One 4-neighbor weighted-average pass over a raw f64 field.
///
/// Out-of-bounds neighbors contribute neither value nor weight. A cell
/// whose applied weights sum to zero keeps its value.
fn smooth_field(
    field: &[f64],
    width: usize,
    height: usize,
    self_weight: f64,
    neighbor_weight: f64,
) -> Vec<f64> {
    debug_assert_eq!(field.len(), width * height);
    let mut out = vec![0.0; field.len()];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let mut sum = self_weight * field[idx];
            let mut weight = self_weight;

            for (dx, dy) in NEIGHBORS4 {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                sum += neighbor_weight * field[ny as usize * width + nx as usize];
                weight += neighbor_weight;
            }

            out[idx] = if weight > 0.0 { sum / weight } else { field[idx] };
        }
    }

    out
}

/// Smooth one scalar channel across the grid, rounding to the nearest band
/// and clamping to the channel's range.
pub fn smooth_channel(
    cells: &mut [WeatherState],
    width: usize,
    height: usize,
    channel: Channel,
    self_weight: f64,
    neighbor_weight: f64,
) {
    debug_assert_eq!(cells.len(), width * height);
    let field: Vec<f64> = cells.iter().map(|c| c.channel(channel) as f64).collect();
    let smoothed = smooth_field(&field, width, height, self_weight, neighbor_weight);
    for (cell, v) in cells.iter_mut().zip(smoothed) {
        cell.set_channel(channel, v.round() as i32);
    }
}

/// Smooth the wind field in vector space.
///
/// Each cell's (dir, force) becomes `(u, v) = (cos a·f, sin a·f)` with
/// `a = dir/8·2π`; u and v are smoothed independently with the same kernel,
/// then converted back: direction from `atan2`, force from the magnitude,
/// clamped to the wind-force band range.
pub fn smooth_wind(
    cells: &mut [WeatherState],
    width: usize,
    height: usize,
    self_weight: f64,
    neighbor_weight: f64,
) {
    debug_assert_eq!(cells.len(), width * height);
    let n = cells.len();
    let dirs = f64::from(WIND_DIR_COUNT);

    let mut u = vec![0.0; n];
    let mut v = vec![0.0; n];
    for (i, cell) in cells.iter().enumerate() {
        let angle = f64::from(cell.wind_dir) / dirs * TAU;
        let force = cell.wind_force as f64;
        u[i] = angle.cos() * force;
        v[i] = angle.sin() * force;
    }

    let su = smooth_field(&u, width, height, self_weight, neighbor_weight);
    let sv = smooth_field(&v, width, height, self_weight, neighbor_weight);

    for (i, cell) in cells.iter_mut().enumerate() {
        let magnitude = (su[i] * su[i] + sv[i] * sv[i]).sqrt();
        let angle = sv[i].atan2(su[i]);
        let dir = (angle / TAU * dirs).round() as i64;
        cell.wind_dir = dir.rem_euclid(i64::from(WIND_DIR_COUNT)) as u8;
        cell.set_channel(Channel::WindForce, magnitude.round() as i32);
    }
}
