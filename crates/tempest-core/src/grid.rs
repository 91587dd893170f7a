//! Grid container and per-tick orchestration.
//!
//! The grid owns the cell array, the global base weather, and the active
//! regime. `step()` is the only mutating entry point and always runs the
//! same fixed pipeline: regime update → base update → per-cell drift →
//! scalar smoothing (sky, temp, precip, wind force) → wind smoothing.
//! Single-threaded, synchronous, and deterministic under a seeded RNG.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::biome::{adjust_base_for_biome, diurnal_temp_offset, BiomeWeatherProfile};
use crate::climate::baseline_temp_band;
use crate::evolve::{step_base_weather, step_cell};
use crate::regime::{step_regime, WeatherRegime};
use crate::rng::UnitRng;
use crate::smooth::{smooth_channel, smooth_wind, DEFAULT_NEIGHBOR_WEIGHT, DEFAULT_SELF_WEIGHT};
use crate::solar::{compute_sunrise_sunset, SunTimes, SOLAR_NOON_HOUR};
use crate::state::{Channel, Season, WeatherState};
use crate::time::Calendar;

/// Construction or access failure. The simulation itself never errors:
/// values are clamped, not rejected.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("biome grid has {actual} entries, expected {expected} (width x height)")]
    BiomeGridSize { expected: usize, actual: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Fixed geographic context of a grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridContext {
    /// Geodetic latitude in degrees, −90 to +90.
    pub lat_deg: f64,
    pub season: Season,
}

/// Optional construction parameters.
#[derive(Default)]
pub struct GridOptions {
    pub initial_regime: Option<WeatherRegime>,
    pub initial_base: Option<WeatherState>,
    /// Per-cell biome ids, row-major, length `width × height`.
    pub biome_grid: Option<Vec<u16>>,
    /// Biome id → profile. Ids without a profile use the unmodified base.
    pub biome_profiles: Option<HashMap<u16, BiomeWeatherProfile>>,
    /// Time source for diurnal shaping. Absent → diurnal offset is 0.
    pub calendar: Option<Box<dyn Calendar>>,
}

/// A 2-D grid of discretized weather evolved by repeated ticks.
pub struct WeatherGrid {
    width: usize,
    height: usize,
    lat_deg: f64,
    season: Season,
    regime: WeatherRegime,
    base: WeatherState,
    cells: Vec<WeatherState>,
    rng: Box<dyn UnitRng>,
    biome_grid: Option<Vec<u16>>,
    biome_profiles: HashMap<u16, BiomeWeatherProfile>,
    calendar: Option<Box<dyn Calendar>>,
    ticks: u64,
}

impl std::fmt::Debug for WeatherGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lat_deg", &self.lat_deg)
            .field("season", &self.season)
            .field("regime", &self.regime)
            .field("base", &self.base)
            .field("cells", &self.cells)
            .field("biome_grid", &self.biome_grid)
            .field("biome_profiles", &self.biome_profiles)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl WeatherGrid {
    /// Create a grid with default options. The RNG is a required,
    /// caller-chosen source; the engine never falls back to an ambient
    /// generator.
    pub fn new(
        width: usize,
        height: usize,
        ctx: GridContext,
        rng: Box<dyn UnitRng>,
    ) -> Result<Self, GridError> {
        Self::with_options(width, height, ctx, rng, GridOptions::default())
    }

    /// Create a grid with explicit options.
    ///
    /// Validates dimensions and, when a biome grid is supplied, that its
    /// length is `width × height`.
    pub fn with_options(
        width: usize,
        height: usize,
        ctx: GridContext,
        rng: Box<dyn UnitRng>,
        options: GridOptions,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let n = width * height;
        if let Some(ref biomes) = options.biome_grid {
            if biomes.len() != n {
                return Err(GridError::BiomeGridSize {
                    expected: n,
                    actual: biomes.len(),
                });
            }
        }

        let base = options
            .initial_base
            .map(WeatherState::clamped)
            .unwrap_or_else(|| {
                WeatherState::mild(baseline_temp_band(ctx.lat_deg, ctx.season))
            });

        Ok(Self {
            width,
            height,
            lat_deg: ctx.lat_deg,
            season: ctx.season,
            regime: options.initial_regime.unwrap_or_default(),
            base,
            cells: vec![base; n],
            rng,
            biome_grid: options.biome_grid,
            biome_profiles: options.biome_profiles.unwrap_or_default(),
            calendar: options.calendar,
            ticks: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn regime(&self) -> WeatherRegime {
        self.regime
    }

    /// The global base weather before biome adjustment.
    pub fn base(&self) -> WeatherState {
        self.base
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[WeatherState] {
        &self.cells
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Replace (or remove) the time source driving diurnal shaping.
    pub fn set_calendar(&mut self, calendar: Option<Box<dyn Calendar>>) {
        self.calendar = calendar;
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Weather at a cell. Out-of-range coordinates are an error, never an
    /// aliased read from a neighboring row.
    pub fn weather_at(&self, x: usize, y: usize) -> Result<WeatherState, GridError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Overwrite a cell. The stored state is clamped into band ranges.
    pub fn set_weather_at(
        &mut self,
        x: usize,
        y: usize,
        state: WeatherState,
    ) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state.clamped();
        Ok(())
    }

    /// Advance the whole simulation by one tick.
    pub fn step(&mut self) {
        self.regime = step_regime(self.regime, self.rng.as_mut());
        self.base = step_base_weather(
            &self.base,
            self.lat_deg,
            self.season,
            self.regime,
            self.rng.as_mut(),
        );

        // Sunrise/sunset depend only on latitude and day, so compute them
        // once per tick; per-cell offsets then vary only with the profile.
        let sun_hour: Option<(SunTimes, f64)> = self.calendar.as_ref().map(|cal| {
            (
                compute_sunrise_sunset(self.lat_deg, cal.day_of_year(), SOLAR_NOON_HOUR),
                cal.hour_of_day(),
            )
        });

        for i in 0..self.cells.len() {
            let profile = self
                .biome_grid
                .as_ref()
                .and_then(|grid| self.biome_profiles.get(&grid[i]));
            let biome_base = adjust_base_for_biome(self.base, profile);
            let delta = match &sun_hour {
                Some((sun, hour)) => diurnal_temp_offset(sun, *hour, SOLAR_NOON_HOUR, profile),
                None => 0,
            };
            let prev = self.cells[i];
            let next = step_cell(&prev, &biome_base, delta, self.rng.as_mut());
            self.cells[i] = next;
        }

        for channel in Channel::ALL {
            smooth_channel(
                &mut self.cells,
                self.width,
                self.height,
                channel,
                DEFAULT_SELF_WEIGHT,
                DEFAULT_NEIGHBOR_WEIGHT,
            );
        }
        smooth_wind(
            &mut self.cells,
            self.width,
            self.height,
            DEFAULT_SELF_WEIGHT,
            DEFAULT_NEIGHBOR_WEIGHT,
        );

        self.ticks += 1;
    }
}
