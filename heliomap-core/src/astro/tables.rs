//! Precomputed trigonometric lookup tables
//!
//! All solar math runs on three small tables built once at startup: a
//! 216-step cosine of the daily rotation, a 365-day cosine of the year
//! angle with the solstice shift baked in, and per-row sine/cosine of the
//! map latitudes. Sines come from the cosine tables through quarter-turn
//! offsets, so no separate sine storage is needed.

use libm::{cosf, sinf};

use core::f32::consts::{PI, TAU};

/// Steps in one daily rotation, one per map column (1 step = 6 2/3 min)
pub const DAY_STEPS: usize = 216;

/// Days in the year table (a leap year's extra day wraps onto index 0)
pub const YEAR_DAYS: usize = 365;

/// Latitude rows, one per map row
pub const LAT_ROWS: usize = 168;

/// Quarter of a daily rotation, exactly 90 degrees
pub const QUARTER_DAY: usize = DAY_STEPS / 4;

/// Quarter of a year in days; 89.75 degrees rather than 90, and the
/// small phase skew is part of the pinned output
pub const QUARTER_YEAR: usize = 91;

/// Days between the December solstice and January 1st, baked into the
/// year table so that index 0 is 10 days past the solstice
pub const SOLSTICE_SHIFT_DAYS: usize = 10;

/// cos(23.5 deg), the Earth's axial tilt
pub const COS_ALPHA: f32 = 0.917060074385124;

/// sin(23.5 deg)
pub const SIN_ALPHA: f32 = 0.398749068925246;

/// Precomputed angle tables
///
/// Built once with [`AngleTables::new`] and never mutated. Every lookup
/// wraps its index with a floor-mod, so the negative offsets the solar
/// model produces freely still index the correct entry.
pub struct AngleTables {
    day_cos: [f32; DAY_STEPS],
    year_cos: [f32; YEAR_DAYS],
    lat_sin: [f32; LAT_ROWS],
    lat_cos: [f32; LAT_ROWS],
}

impl AngleTables {
    /// Build all tables
    pub fn new() -> Self {
        let mut day_cos = [0.0; DAY_STEPS];
        for (step, sample) in day_cos.iter_mut().enumerate() {
            *sample = cosf(step as f32 * TAU / DAY_STEPS as f32);
        }

        let mut year_cos = [0.0; YEAR_DAYS];
        for (day, sample) in year_cos.iter_mut().enumerate() {
            *sample = cosf((day + SOLSTICE_SHIFT_DAYS) as f32 * TAU / YEAR_DAYS as f32);
        }

        // Both latitude tables sample one sine. Row 0 is 90N, row 84 the
        // equator, row 167 just short of 90S; cos(latitude) is the sine of
        // the colatitude, which keeps the zeros at the poles and the
        // equator exact instead of off by a rounded half pi.
        let step = PI / LAT_ROWS as f32;
        let mut lat_sin = [0.0; LAT_ROWS];
        let mut lat_cos = [0.0; LAT_ROWS];
        for row in 0..LAT_ROWS {
            lat_sin[row] = sinf((84 - row as i32) as f32 * step);
            lat_cos[row] = sinf(row as f32 * step);
        }

        Self {
            day_cos,
            year_cos,
            lat_sin,
            lat_cos,
        }
    }

    /// Cosine of the daily rotation at `step`, wrapping
    pub fn day_cos(&self, step: i32) -> f32 {
        self.day_cos[floor_mod(step, DAY_STEPS)]
    }

    /// Sine of the daily rotation at `step`, via the quarter-turn offset
    pub fn day_sin(&self, step: i32) -> f32 {
        -self.day_cos[floor_mod(step + QUARTER_DAY as i32, DAY_STEPS)]
    }

    /// Cosine of the year angle on `day`, wrapping
    pub fn year_cos(&self, day: i32) -> f32 {
        self.year_cos[floor_mod(day, YEAR_DAYS)]
    }

    /// Sine of the year angle on `day`, via the quarter-year offset
    pub fn year_sin(&self, day: i32) -> f32 {
        -self.year_cos[floor_mod(day + QUARTER_YEAR as i32, YEAR_DAYS)]
    }

    /// Sine of the latitude at map row `row` (positive north)
    pub fn lat_sin(&self, row: usize) -> f32 {
        self.lat_sin[row]
    }

    /// Cosine of the latitude at map row `row`
    pub fn lat_cos(&self, row: usize) -> f32 {
        self.lat_cos[row]
    }
}

impl Default for AngleTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Center latitude in degrees of map row `row`
pub fn row_center_latitude(row: usize) -> f32 {
    90.0 - (row as f32 + 0.5) * (180.0 / LAT_ROWS as f32)
}

/// Inverse latitude lookup: the first row whose center latitude drops
/// below the target, or the bottom row for the south pole itself
pub fn home_row(latitude: i16) -> u16 {
    for row in 0..LAT_ROWS {
        if row_center_latitude(row) < latitude as f32 {
            return row as u16;
        }
    }
    (LAT_ROWS - 1) as u16
}

/// Floor-mod an index into a table of length `len`
///
/// `rem_euclid` wraps negative offsets toward the correct end of the
/// table; a truncating `%` would map -1 near entry 0 instead.
fn floor_mod(index: i32, len: usize) -> usize {
    index.rem_euclid(len as i32) as usize
}
