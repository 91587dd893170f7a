//! Grid-based stochastic weather simulation.
//!
//! A per-cell discretized climate model: a latitudinal baseline and a
//! Markov regime chain bias a grid-wide base weather, each cell drifts
//! toward its biome-adjusted base with diurnal temperature shaping, and
//! smoothing passes (scalar per channel, vector-space for wind) keep the
//! field spatially coherent.
//!
//! Per-tick pipeline, run by [`grid::WeatherGrid::step`]:
//!   regime update → base update → per-cell drift → scalar smoothing ×4 →
//!   wind smoothing.
//!
//! The engine is single-threaded and synchronous. All randomness comes
//! from an injected [`rng::UnitRng`] and all time from an optional
//! injected [`time::Calendar`], so a seeded run is fully deterministic.

pub mod biome;
pub mod climate;
pub mod evolve;
pub mod grid;
pub mod regime;
pub mod rng;
pub mod smooth;
pub mod solar;
pub mod state;
pub mod stepper;
pub mod time;

pub use biome::BiomeWeatherProfile;
pub use grid::{GridContext, GridError, GridOptions, WeatherGrid};
pub use regime::WeatherRegime;
pub use rng::{ScriptedRng, SeededUnitRng, UnitRng};
pub use state::{Channel, Season, WeatherState};
pub use time::{Calendar, FixedCalendar};
