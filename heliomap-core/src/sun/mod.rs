//! Sunrise and sunset for the home location
//!
//! The solver reuses the render-path illumination field: it scans the
//! home latitude row eastward for sign changes and converts the crossing
//! offsets into clock times.

pub mod crossing;
pub mod report;

pub use crossing::{minutes_at_offset, scan, Crossings, SUNSET_LAG_MIN};
pub use report::{ClockStyle, SunReport, MAX_REPORT_LEN};
