//! Per-pixel illumination field
//!
//! The sign of a dot product between the surface normal (tilted 23.5
//! degrees off the orbital axis) and the direction to the sun decides
//! day or night for every map point. Negative means sunlit.

use super::tables::{AngleTables, COS_ALPHA, SIN_ALPHA};

/// Per-frame solar geometry: the year-angle factors, hoisted out of the
/// pixel loops
pub struct SolarGeometry<'a> {
    tables: &'a AngleTables,
    cos_year: f32,
    sin_year: f32,
}

impl<'a> SolarGeometry<'a> {
    /// Capture the year angle for `day_of_year`
    pub fn new(tables: &'a AngleTables, day_of_year: u16) -> Self {
        Self {
            tables,
            cos_year: tables.year_cos(day_of_year as i32),
            sin_year: tables.year_sin(day_of_year as i32),
        }
    }

    /// Capture the daily-rotation factors for the map column at `step`
    pub fn column(&self, step: i32) -> ColumnLight<'a> {
        ColumnLight {
            tables: self.tables,
            cos_theta: self.tables.day_cos(step),
            sin_theta: self.tables.day_sin(step),
            cos_year: self.cos_year,
            sin_year: self.sin_year,
        }
    }

    /// Illumination at a single (step, row) point
    pub fn illumination(&self, step: i32, row: usize) -> f32 {
        self.column(step).at_row(row)
    }
}

/// One column of the illumination field with all angle factors resolved
pub struct ColumnLight<'a> {
    tables: &'a AngleTables,
    cos_theta: f32,
    sin_theta: f32,
    cos_year: f32,
    sin_year: f32,
}

impl ColumnLight<'_> {
    /// Dot product of the surface point at `row` with the sun direction
    ///
    /// Negative values are sunlit, non-negative values are in night.
    pub fn at_row(&self, row: usize) -> f32 {
        let cos_phi = self.tables.lat_cos(row);
        let sin_phi = self.tables.lat_sin(row);
        (cos_phi * self.cos_theta * COS_ALPHA + sin_phi * SIN_ALPHA) * self.cos_year
            + cos_phi * self.sin_theta * self.sin_year
    }

    /// Day/night test for [`at_row`](Self::at_row)
    pub fn sunlit(&self, row: usize) -> bool {
        self.at_row(row) < 0.0
    }
}
