//! Solar position model
//!
//! Maps a home-local wall clock plus the home timezone into the two
//! offsets that drive the renderer: the daily rotation step and the day
//! of year, with a small equation-of-time correction in rotation steps.

use super::tables::{DAY_STEPS, YEAR_DAYS};

/// Minutes in a day
pub const MINUTES_PER_DAY: u32 = 1440;

/// Daily-rotation steps the sun gains per elapsed day of the year, as the
/// integer ratio 59/100 (~216/365); keeps the map tracking the sun rather
/// than the stars
const DAY_DRIFT_NUM: i32 = 59;
const DAY_DRIFT_DEN: i32 = 100;

/// A home-local calendar instant
///
/// Hosts build this from whatever clock they have. On leap years
/// December 31st is day 365 and wraps onto the year table's day 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Day of year, 0-based (0 = January 1st)
    pub day_of_year: u16,
}

impl WallClock {
    /// Create a wall clock value
    pub const fn new(hour: u8, minute: u8, day_of_year: u16) -> Self {
        Self {
            hour,
            minute,
            day_of_year,
        }
    }

    /// Minute of the local day, 0..1440
    pub fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

/// Derived solar rotation state
///
/// Fully recomputed from a wall clock on every update; comparing two
/// states tells the renderer whether anything visible changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolarState {
    /// Daily rotation step, 0..216
    pub time_of_day: u16,
    /// Day of year, 0..365
    pub day_of_year: u16,
    /// Equation-of-time correction in rotation steps, -3..=2
    pub correction: i8,
}

impl SolarState {
    /// Compute the solar state for a home-local wall clock
    ///
    /// `timezone_half_hours` is the home offset from UTC in half-hour
    /// units. Re-basing by +24 half hours (12 h) keeps the intermediate
    /// sums non-negative and puts local solar noon at the rotation
    /// origin.
    pub fn compute(clock: WallClock, timezone_half_hours: i8) -> Self {
        let half_hours =
            clock.hour as i32 * 2 + clock.minute as i32 / 30 - timezone_half_hours as i32 + 24;
        let total_minutes = half_hours * 30 + clock.minute as i32 % 30;
        // 1440 minutes map onto 216 steps, a ratio of 3/20
        let time_of_day = (total_minutes * 3 / 20).rem_euclid(DAY_STEPS as i32) as u16;
        let day_of_year = clock.day_of_year % YEAR_DAYS as u16;

        Self {
            time_of_day,
            day_of_year,
            correction: solar_correction(day_of_year),
        }
    }

    /// Composed daily rotation: the time of day, plus the accumulated
    /// year drift, minus the equation-of-time correction
    ///
    /// Left unwrapped on purpose; table lookups floor-mod it.
    pub fn rotation(&self) -> i32 {
        self.time_of_day as i32 + self.day_of_year as i32 * DAY_DRIFT_NUM / DAY_DRIFT_DEN
            - self.correction as i32
    }
}

/// Equation-of-time buckets as (first day of year, correction in steps)
///
/// A floor quantization of the negated equation-of-time curve to the
/// one-step (6 2/3 min) resolution of the daily rotation; the hand-tuned
/// bucket edges sit a day or two off the closed form. Negating the curve
/// makes the subtraction in [`SolarState::rotation`] oppose the seasonal
/// drift of solar noon against clock time: when the sundial runs ahead
/// of the clock, as in early November, the entry is negative and the
/// subsolar point shifts west. Thirteen buckets cover the year; values
/// stay within -3..=2.
const EQUATION_OF_TIME: [(u16, i8); 13] = [
    (0, 0),
    (7, 1),
    (29, 2),
    (58, 1),
    (83, 0),
    (105, -1),
    (165, 0),
    (241, -1),
    (259, -2),
    (280, -3),
    (324, -2),
    (342, -1),
    (356, 0),
];

/// Correction in rotation steps for a day of the year
pub fn solar_correction(day_of_year: u16) -> i8 {
    let day = day_of_year % YEAR_DAYS as u16;
    let mut correction = EQUATION_OF_TIME[0].1;
    for (start, steps) in EQUATION_OF_TIME {
        if day >= start {
            correction = steps;
        }
    }
    correction
}
