//! Injected calendar abstraction for diurnal shaping.
//!
//! The simulation core has no implicit temporal dependency: a grid that is
//! given no calendar simply runs with diurnal shaping disabled. Hosts with
//! their own game clock implement [`Calendar`] over it, or push updates
//! into a [`FixedCalendar`] between ticks.

/// Provider of the current in-universe time.
///
/// The year is 360 days long with day 0 at the spring equinox, matching
/// the solar model in [`crate::solar`].
pub trait Calendar {
    /// Day of year in `[0, 360)`.
    fn day_of_year(&self) -> u32;

    /// Hour of day in `[0, 24)`.
    fn hour_of_day(&self) -> f64;
}

/// A calendar holding a fixed (day, hour) that the owner advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCalendar {
    day: u32,
    hour: f64,
}

impl FixedCalendar {
    pub fn new(day_of_year: u32, hour_of_day: f64) -> Self {
        Self {
            day: day_of_year % crate::solar::DAYS_PER_YEAR,
            hour: hour_of_day.rem_euclid(24.0),
        }
    }

    pub fn set(&mut self, day_of_year: u32, hour_of_day: f64) {
        self.day = day_of_year % crate::solar::DAYS_PER_YEAR;
        self.hour = hour_of_day.rem_euclid(24.0);
    }

    /// Advance by a (possibly fractional, possibly multi-day) number of
    /// hours, wrapping days across the 360-day year.
    pub fn advance_hours(&mut self, hours: f64) {
        let total = self.hour + hours;
        let days = (total / 24.0).floor() as i64;
        self.hour = total.rem_euclid(24.0);
        let day = self.day as i64 + days;
        self.day = day.rem_euclid(crate::solar::DAYS_PER_YEAR as i64) as u32;
    }
}

impl Calendar for FixedCalendar {
    fn day_of_year(&self) -> u32 {
        self.day
    }

    fn hour_of_day(&self) -> f64 {
        self.hour
    }
}
