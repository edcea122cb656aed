//! Solar geometry
//!
//! The angle tables, the solar position model and the per-pixel
//! illumination field shared by the compositor and the sunrise/sunset
//! solver.

pub mod illumination;
pub mod solar;
pub mod tables;

pub use illumination::{ColumnLight, SolarGeometry};
pub use solar::{solar_correction, SolarState, WallClock, MINUTES_PER_DAY};
pub use tables::{AngleTables, DAY_STEPS, LAT_ROWS, YEAR_DAYS};
