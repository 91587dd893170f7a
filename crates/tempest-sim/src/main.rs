/// Offline simulation runner: builds a seeded weather grid, ticks it, and
/// reports a summary as a human-readable table or JSON.
use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use tempest_core::{
    Calendar, FixedCalendar, GridContext, GridOptions, Season, SeededUnitRng, WeatherGrid,
    WeatherRegime, WeatherState,
};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "tempest-sim",
    about = "Run a seeded grid weather simulation and report a summary"
)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value = "16")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "16")]
    height: usize,

    /// Geodetic latitude in degrees (-90 to 90)
    #[arg(long, default_value = "45.0")]
    lat: f64,

    /// Season: winter, spring, summer, or autumn
    #[arg(long, default_value = "summer")]
    season: String,

    /// RNG seed (deterministic replay)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of ticks to run
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// Enable diurnal shaping, advancing this many hours per tick
    #[arg(long)]
    hours_per_tick: Option<f64>,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

// ── Summary schema ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChannelRange {
    min: i32,
    max: i32,
}

#[derive(Serialize)]
struct Summary {
    width: usize,
    height: usize,
    lat_deg: f64,
    season: String,
    seed: u64,
    ticks: u64,
    final_regime: WeatherRegime,
    regime_visits: HashMap<String, u64>,
    base: WeatherState,
    sky: ChannelRange,
    temp: ChannelRange,
    precip: ChannelRange,
    wind_force: ChannelRange,
}

fn channel_range(cells: &[WeatherState], read: impl Fn(&WeatherState) -> i32) -> ChannelRange {
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for cell in cells {
        let v = read(cell);
        min = min.min(v);
        max = max.max(v);
    }
    ChannelRange { min, max }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let season: Season = args
        .season
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("invalid --season")?;

    let ctx = GridContext {
        lat_deg: args.lat,
        season,
    };
    let rng = Box::new(SeededUnitRng::seed_from_u64(args.seed));
    let mut clock = FixedCalendar::new(0, 0.0);
    let options = GridOptions {
        calendar: args
            .hours_per_tick
            .map(|_| Box::new(clock) as Box<dyn Calendar>),
        ..Default::default()
    };
    let mut grid = WeatherGrid::with_options(args.width, args.height, ctx, rng, options)
        .context("failed to construct grid")?;

    let mut regime_visits: HashMap<String, u64> = HashMap::new();
    for _ in 0..args.ticks {
        grid.step();
        *regime_visits
            .entry(format!("{:?}", grid.regime()))
            .or_insert(0) += 1;
        if let Some(hours) = args.hours_per_tick {
            clock.advance_hours(hours);
            grid.set_calendar(Some(Box::new(clock)));
        }
    }

    let summary = Summary {
        width: args.width,
        height: args.height,
        lat_deg: args.lat,
        season: season.to_string(),
        seed: args.seed,
        ticks: args.ticks,
        final_regime: grid.regime(),
        regime_visits,
        base: grid.base(),
        sky: channel_range(grid.cells(), |c| c.sky),
        temp: channel_range(grid.cells(), |c| c.temp),
        precip: channel_range(grid.cells(), |c| c.precip),
        wind_force: channel_range(grid.cells(), |c| c.wind_force),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_table(&summary);
    }

    Ok(())
}

fn print_table(s: &Summary) {
    println!(
        "{}x{} grid, lat {}°, {}, seed {}, {} ticks",
        s.width, s.height, s.lat_deg, s.season, s.seed, s.ticks
    );
    println!("final regime: {:?}", s.final_regime);
    let mut visits: Vec<_> = s.regime_visits.iter().collect();
    visits.sort_by(|a, b| b.1.cmp(a.1));
    for (regime, count) in visits {
        println!("  {regime:<10} {count} ticks");
    }
    println!(
        "base: sky {} temp {} wind {}@{} precip {}",
        s.base.sky, s.base.temp, s.base.wind_force, s.base.wind_dir, s.base.precip
    );
    println!("cell ranges:");
    println!("  sky        {}..={}", s.sky.min, s.sky.max);
    println!("  temp       {}..={}", s.temp.min, s.temp.max);
    println!("  precip     {}..={}", s.precip.min, s.precip.max);
    println!("  wind force {}..={}", s.wind_force.min, s.wind_force.max);
}
