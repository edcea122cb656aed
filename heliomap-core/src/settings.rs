//! Home location settings
//!
//! Validated home coordinates plus the edit semantics of the reference
//! device UI: latitude saturates at the poles, longitude and timezone
//! wrap around the antimeridian. With the `serde` feature the settings
//! serialize through serde; [`HomeSettings::to_postcard`] gives the
//! compact byte form used for small persistent stores.

use crate::astro::tables::{home_row, DAY_STEPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default home latitude, degrees north
pub const DEFAULT_LATITUDE: i16 = 37;

/// Default home longitude, degrees east
pub const DEFAULT_LONGITUDE: i16 = -122;

/// Default home timezone in half hours from UTC (Pacific Standard Time)
pub const DEFAULT_TIMEZONE_HALF_HOURS: i8 = -16;

/// Errors from settings validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Latitude outside -90..=90 degrees
    Latitude,
    /// Longitude outside -180..=180 degrees
    Longitude,
    /// Timezone outside -24..=24 half hours
    Timezone,
    /// Stored bytes failed to decode
    #[cfg(feature = "serde")]
    Decode,
}

/// Validated home settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HomeSettings {
    /// Home latitude in degrees, -90..=90
    pub latitude: i16,
    /// Home longitude in degrees, -180..=180
    pub longitude: i16,
    /// Home timezone in half hours from UTC, -24..=24
    pub timezone_half_hours: i8,
    /// Whether the sunrise/sunset line is shown
    pub show_sun_times: bool,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            timezone_half_hours: DEFAULT_TIMEZONE_HALF_HOURS,
            show_sun_times: true,
        }
    }
}

impl HomeSettings {
    /// Build validated settings
    pub fn new(
        latitude: i16,
        longitude: i16,
        timezone_half_hours: i8,
        show_sun_times: bool,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            latitude,
            longitude,
            timezone_half_hours,
            show_sun_times,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check all ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(-90..=90).contains(&self.latitude) {
            return Err(SettingsError::Latitude);
        }
        if !(-180..=180).contains(&self.longitude) {
            return Err(SettingsError::Longitude);
        }
        if !(-24..=24).contains(&self.timezone_half_hours) {
            return Err(SettingsError::Timezone);
        }
        Ok(())
    }

    /// Step latitude by `delta` degrees, saturating at the poles
    pub fn nudge_latitude(&mut self, delta: i16) {
        self.latitude = (self.latitude + delta).clamp(-90, 90);
    }

    /// Step longitude by `delta` degrees, wrapping across the
    /// antimeridian: one step east of 179 is -180
    pub fn nudge_longitude(&mut self, delta: i16) {
        let mut lon = self.longitude + delta;
        while lon >= 180 {
            lon -= 360;
        }
        while lon < -180 {
            lon += 360;
        }
        self.longitude = lon;
    }

    /// Step the timezone by `delta` half hours, wrapping past the date
    /// line: one step east of +12:00 is -11:30
    pub fn nudge_timezone(&mut self, delta: i8) {
        let tz = self.timezone_half_hours as i32 + delta as i32;
        self.timezone_half_hours = ((tz + 23).rem_euclid(48) - 23) as i8;
    }

    /// Toggle the sunrise/sunset line
    pub fn toggle_sun_times(&mut self) {
        self.show_sun_times = !self.show_sun_times;
    }

    /// Derive the home map position
    pub fn home_position(&self) -> HomePosition {
        HomePosition {
            col: home_col(self.longitude),
            row: home_row(self.latitude),
        }
    }

    /// Serialize into `buf` as postcard bytes
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Deserialize from postcard bytes, re-validating the ranges
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, SettingsError> {
        let settings: Self = postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Home location as map pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomePosition {
    /// Map column, 0..216
    pub col: u16,
    /// Map row, 0..168
    pub row: u16,
}

/// Map column for a longitude: the linear equirectangular mapping, with
/// +180 wrapping onto the -180 column
fn home_col(longitude: i16) -> u16 {
    (((longitude as i32 + 180) * DAY_STEPS as i32 / 360).rem_euclid(DAY_STEPS as i32)) as u16
}
