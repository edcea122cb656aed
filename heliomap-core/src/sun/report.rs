//! Sunrise/sunset report formatting

use core::fmt::Write;

use heapless::String;

use super::crossing::{minutes_at_offset, Crossings, SUNSET_LAG_MIN};
use crate::astro::solar::MINUTES_PER_DAY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest report line: "rise 12:59am set 12:59pm"
pub const MAX_REPORT_LEN: usize = 24;

/// Clock display style for the report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// 24-hour clock, zero padded
    #[default]
    H24,
    /// 12-hour clock with an am/pm suffix
    H12,
}

/// Sunrise and sunset clock times for the home row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SunReport {
    /// Sunrise, minute of the home-local day
    pub sunrise_min: Option<u16>,
    /// Sunset, minute of the home-local day, lag included
    pub sunset_min: Option<u16>,
}

impl SunReport {
    /// Convert scan crossings into clock times
    ///
    /// `now_minutes` is the home-local minute of day the scan started
    /// from. The sunset lag is applied here, wrapping past midnight.
    pub fn from_crossings(crossings: Crossings, now_minutes: u16) -> Self {
        Self {
            sunrise_min: crossings
                .sunrise
                .map(|offset| minutes_at_offset(now_minutes, offset)),
            sunset_min: crossings.sunset.map(|offset| {
                ((minutes_at_offset(now_minutes, offset) as u32 + SUNSET_LAG_MIN)
                    % MINUTES_PER_DAY) as u16
            }),
        }
    }

    /// Format the report line
    ///
    /// With both crossings present: "rise HH:MM set HH:MM" (or the
    /// 12-hour variant). With either one missing, as in polar day or
    /// night, the sentinel "No sunrise/sunset".
    pub fn format(&self, style: ClockStyle) -> String<MAX_REPORT_LEN> {
        let mut line = String::new();
        match (self.sunrise_min, self.sunset_min) {
            (Some(rise), Some(set)) => {
                let _ = line.push_str("rise ");
                write_time(&mut line, rise, style);
                let _ = line.push_str(" set ");
                write_time(&mut line, set, style);
            }
            _ => {
                let _ = line.push_str("No sunrise/sunset");
            }
        }
        line
    }
}

fn write_time(line: &mut String<MAX_REPORT_LEN>, minutes: u16, style: ClockStyle) {
    let hour = minutes / 60;
    let minute = minutes % 60;
    match style {
        ClockStyle::H24 => {
            let _ = write!(line, "{hour:02}:{minute:02}");
        }
        ClockStyle::H12 => {
            let suffix = if hour < 12 { "am" } else { "pm" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            let _ = write!(line, "{display}:{minute:02}{suffix}");
        }
    }
}
