//! Weather bands, channels, and per-cell state.
//!
//! Every weather scalar is a *band*: a small integer in a fixed inclusive
//! range with named levels. Bands are stored as `i32` so stepping and
//! smoothing arithmetic stays plain integer math; every write path clamps
//! back into the declared range.

use serde::{Deserialize, Serialize};

/// Temperature bands, coldest to hottest.
///
/// Seven levels so the smoothing bounds (0, 6) and the named range
/// FRIGID..FURNACE are the same set.
pub mod temp {
    pub const FRIGID: i32 = 0;
    pub const COLD: i32 = 1;
    pub const COOL: i32 = 2;
    pub const MILD: i32 = 3;
    pub const WARM: i32 = 4;
    pub const HOT: i32 = 5;
    pub const FURNACE: i32 = 6;
}

/// Sky cover bands, clearest to fully obscured.
pub mod sky {
    pub const CLEAR: i32 = 0;
    pub const MOSTLY_CLEAR: i32 = 1;
    pub const PARTLY_CLOUDY: i32 = 2;
    pub const MOSTLY_CLOUDY: i32 = 3;
    pub const CLOUDY: i32 = 4;
    pub const OVERCAST: i32 = 5;
    pub const HEAVY_OVERCAST: i32 = 6;
    pub const OBSCURED: i32 = 7;
}

/// Precipitation intensity bands.
pub mod precip {
    pub const NONE: i32 = 0;
    pub const DRIZZLE: i32 = 1;
    pub const LIGHT: i32 = 2;
    pub const MODERATE: i32 = 3;
    pub const HEAVY: i32 = 4;
    pub const TORRENTIAL: i32 = 5;
    pub const EXTREME: i32 = 6;
}

/// Wind force bands: the 13-step Beaufort ladder.
pub mod wind {
    pub const CALM: i32 = 0;
    pub const LIGHT_AIR: i32 = 1;
    pub const LIGHT_BREEZE: i32 = 2;
    pub const GENTLE_BREEZE: i32 = 3;
    pub const MODERATE_BREEZE: i32 = 4;
    pub const FRESH_BREEZE: i32 = 5;
    pub const STRONG_BREEZE: i32 = 6;
    pub const NEAR_GALE: i32 = 7;
    pub const GALE: i32 = 8;
    pub const STRONG_GALE: i32 = 9;
    pub const STORM: i32 = 10;
    pub const VIOLENT_STORM: i32 = 11;
    pub const HURRICANE: i32 = 12;
}

/// Number of compass points for `wind_dir` (0 = north, clockwise).
pub const WIND_DIR_COUNT: u8 = 8;

/// The four scalar weather channels. `wind_dir` is deliberately not a
/// channel: direction is circular and is smoothed in vector space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Sky,
    Temp,
    Precip,
    WindForce,
}

impl Channel {
    /// All channels in the order the per-tick smoothing passes run.
    pub const ALL: [Channel; 4] = [
        Channel::Sky,
        Channel::Temp,
        Channel::Precip,
        Channel::WindForce,
    ];

    /// Inclusive (min, max) band bounds for this channel.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            Channel::Sky => (sky::CLEAR, sky::OBSCURED),
            Channel::Temp => (temp::FRIGID, temp::FURNACE),
            Channel::Precip => (precip::NONE, precip::EXTREME),
            Channel::WindForce => (wind::CALM, wind::HURRICANE),
        }
    }

    /// Clamp a raw value into this channel's band range.
    pub fn clamp(self, value: i32) -> i32 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }
}

/// Discretized weather at one grid cell (or the grid-wide base).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherState {
    pub sky: i32,
    pub temp: i32,
    /// Eight-way compass index, 0 = north, clockwise.
    pub wind_dir: u8,
    pub wind_force: i32,
    pub precip: i32,
}

impl WeatherState {
    /// A calm, mild state: partly cloudy, given temperature band, a light
    /// breeze from the north, no precipitation.
    pub fn mild(temp_band: i32) -> Self {
        Self {
            sky: sky::PARTLY_CLOUDY,
            temp: Channel::Temp.clamp(temp_band),
            wind_dir: 0,
            wind_force: wind::LIGHT_BREEZE,
            precip: precip::NONE,
        }
    }

    /// Read one scalar channel.
    pub fn channel(&self, ch: Channel) -> i32 {
        match ch {
            Channel::Sky => self.sky,
            Channel::Temp => self.temp,
            Channel::Precip => self.precip,
            Channel::WindForce => self.wind_force,
        }
    }

    /// Write one scalar channel, clamping into its band range.
    pub fn set_channel(&mut self, ch: Channel, value: i32) {
        let v = ch.clamp(value);
        match ch {
            Channel::Sky => self.sky = v,
            Channel::Temp => self.temp = v,
            Channel::Precip => self.precip = v,
            Channel::WindForce => self.wind_force = v,
        }
    }

    /// Return a copy with every field forced into its declared range.
    pub fn clamped(mut self) -> Self {
        for ch in Channel::ALL {
            let v = self.channel(ch);
            self.set_channel(ch, v);
        }
        self.wind_dir %= WIND_DIR_COUNT;
        self
    }

    /// True when every field lies in its declared range.
    pub fn in_range(&self) -> bool {
        self.wind_dir < WIND_DIR_COUNT
            && Channel::ALL.iter().all(|&ch| {
                let (min, max) = ch.bounds();
                (min..=max).contains(&self.channel(ch))
            })
    }
}

impl Default for WeatherState {
    fn default() -> Self {
        Self::mild(temp::MILD)
    }
}

/// The four seasons driving the latitudinal temperature baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn all() -> &'static [Season] {
        &[Season::Winter, Season::Spring, Season::Summer, Season::Autumn]
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            other => Err(format!("unknown season: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_bounds_match_band_constants() {
        assert_eq!(Channel::Sky.bounds(), (sky::CLEAR, sky::OBSCURED));
        assert_eq!(Channel::Temp.bounds(), (temp::FRIGID, temp::FURNACE));
        assert_eq!(Channel::Precip.bounds(), (precip::NONE, precip::EXTREME));
        assert_eq!(Channel::WindForce.bounds(), (wind::CALM, wind::HURRICANE));
    }

    #[test]
    fn set_channel_clamps_both_ends() {
        let mut w = WeatherState::default();
        w.set_channel(Channel::Temp, 99);
        assert_eq!(w.temp, temp::FURNACE);
        w.set_channel(Channel::Temp, -99);
        assert_eq!(w.temp, temp::FRIGID);
        w.set_channel(Channel::WindForce, 100);
        assert_eq!(w.wind_force, wind::HURRICANE);
    }

    #[test]
    fn clamped_repairs_out_of_range_state() {
        let w = WeatherState {
            sky: -3,
            temp: 40,
            wind_dir: 11,
            wind_force: -1,
            precip: 9,
        };
        let c = w.clamped();
        assert!(c.in_range(), "clamped state still out of range: {c:?}");
        assert_eq!(c.sky, sky::CLEAR);
        assert_eq!(c.temp, temp::FURNACE);
        assert_eq!(c.wind_dir, 3);
        assert_eq!(c.precip, precip::EXTREME);
    }

    #[test]
    fn season_roundtrips_through_strings() {
        for &s in Season::all() {
            let parsed: Season = s.to_string().parse().unwrap();
            assert_eq!(parsed, s);
        }
        assert_eq!("fall".parse::<Season>().unwrap(), Season::Autumn);
        assert!("monsoon".parse::<Season>().is_err());
    }
}
