//! Latitudinal climate baseline.
//!
//! Classifies latitude into five zones and maps (zone, season) to a target
//! temperature band. The table is total: every pair is covered, and bands
//! are monotonically warmer toward the equator and in summer.

use serde::{Deserialize, Serialize};

use crate::state::{temp, Season};

/// Latitudinal climate zone, equator outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatitudeZone {
    Equatorial,
    Tropical,
    Temperate,
    Subpolar,
    Polar,
}

/// Classify `|lat_deg|` with strict less-than boundaries at 15/30/50/66:
/// a latitude exactly on a boundary belongs to the poleward zone.
pub fn zone_for_latitude(lat_deg: f64) -> LatitudeZone {
    let lat = lat_deg.abs();
    if lat < 15.0 {
        LatitudeZone::Equatorial
    } else if lat < 30.0 {
        LatitudeZone::Tropical
    } else if lat < 50.0 {
        LatitudeZone::Temperate
    } else if lat < 66.0 {
        LatitudeZone::Subpolar
    } else {
        LatitudeZone::Polar
    }
}

/// Target temperature band for a latitude and season.
pub fn baseline_temp_band(lat_deg: f64, season: Season) -> i32 {
    use LatitudeZone::*;
    use Season::*;

    match (zone_for_latitude(lat_deg), season) {
        (Equatorial, Winter) => temp::WARM,
        (Equatorial, Spring) => temp::HOT,
        (Equatorial, Summer) => temp::HOT,
        (Equatorial, Autumn) => temp::HOT,

        (Tropical, Winter) => temp::COOL,
        (Tropical, Spring) => temp::WARM,
        (Tropical, Summer) => temp::HOT,
        (Tropical, Autumn) => temp::WARM,

        (Temperate, Winter) => temp::COLD,
        (Temperate, Spring) => temp::COOL,
        (Temperate, Summer) => temp::WARM,
        (Temperate, Autumn) => temp::COOL,

        (Subpolar, Winter) => temp::FRIGID,
        (Subpolar, Spring) => temp::COLD,
        (Subpolar, Summer) => temp::COOL,
        (Subpolar, Autumn) => temp::COLD,

        (Polar, Winter) => temp::FRIGID,
        (Polar, Spring) => temp::FRIGID,
        (Polar, Summer) => temp::COLD,
        (Polar, Autumn) => temp::FRIGID,
    }
}
