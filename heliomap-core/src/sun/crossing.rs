//! Terminator crossing scan
//!
//! Sweeps the illumination field eastward from the home column across
//! one full revolution and records where the sign flips: leaving
//! sunlight is sunset, re-entering it is sunrise. Offsets convert to
//! clock minutes at 6 2/3 minutes per step.

use crate::astro::solar::MINUTES_PER_DAY;
use crate::astro::tables::DAY_STEPS;

/// Empirical lag added to the computed sunset time, in minutes
///
/// Carried from the tuning of the reference display; its sunsets read
/// consistently early without it.
pub const SUNSET_LAG_MIN: u32 = 25;

/// Scan offsets (daily steps east of home) where the terminator was
/// crossed within one revolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crossings {
    /// First offset where the field turned sunlit (night into day)
    pub sunrise: Option<u16>,
    /// First offset where the field turned dark (day into night)
    pub sunset: Option<u16>,
}

/// Scan one revolution of the illumination field
///
/// `illumination(offset)` samples the field `offset` steps east of the
/// home column; negative values are sunlit. The scan runs over offsets
/// 0..=216, one past a full turn, so a flip between the last step and
/// the start is still seen; offset 216 converts to now + 24 h, the same
/// clock time as offset 0.
pub fn scan<F>(illumination: F) -> Crossings
where
    F: Fn(u16) -> f32,
{
    let mut crossings = Crossings::default();
    let mut last = illumination(0);

    for offset in 1..=DAY_STEPS as u16 {
        let dp = illumination(offset);
        if last < 0.0 && dp >= 0.0 && crossings.sunset.is_none() {
            crossings.sunset = Some(offset);
        }
        if last >= 0.0 && dp < 0.0 && crossings.sunrise.is_none() {
            crossings.sunrise = Some(offset);
        }
        last = dp;
    }

    crossings
}

/// Clock minute of day reached `offset` steps east of home, counted from
/// the current home-local minute
pub fn minutes_at_offset(now_minutes: u16, offset: u16) -> u16 {
    ((now_minutes as u32 + offset as u32 * MINUTES_PER_DAY / DAY_STEPS as u32) % MINUTES_PER_DAY)
        as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_lit_band() {
        // Dark until offset 54, sunlit until 162, dark again after
        let crossings = scan(|offset| if (54..162).contains(&offset) { -1.0 } else { 1.0 });
        assert_eq!(crossings.sunrise, Some(54));
        assert_eq!(crossings.sunset, Some(162));
    }

    #[test]
    fn test_offsets_convert_to_clock_minutes() {
        let crossings = scan(|offset| if (54..162).contains(&offset) { -1.0 } else { 1.0 });
        let rise = minutes_at_offset(720, crossings.sunrise.unwrap());
        let set = minutes_at_offset(720, crossings.sunset.unwrap());
        // 54 steps = 360 min, 162 steps = 1080 min
        assert_eq!(rise, 1080);
        assert_eq!(set, (720 + 1080) % 1440);
    }

    #[test]
    fn test_polar_day_and_night_find_nothing() {
        assert_eq!(scan(|_| -1.0), Crossings::default());
        assert_eq!(scan(|_| 1.0), Crossings::default());
    }

    #[test]
    fn test_crossing_on_the_wrap_step() {
        // Dark west of offset 100, sunlit through the wrap; the flip
        // back to dark happens between steps 215 and 216
        let crossings = scan(|offset| if offset % 216 < 100 { 1.0 } else { -1.0 });
        assert_eq!(crossings.sunrise, Some(100));
        assert_eq!(crossings.sunset, Some(216));
        assert_eq!(minutes_at_offset(720, 216), 720);
    }

    #[test]
    fn test_only_first_crossing_of_each_kind_counts() {
        // Two lit bands; the scan reports the nearest flip of each kind
        let crossings = scan(|offset| {
            if (10..40).contains(&offset) || (120..180).contains(&offset) {
                -1.0
            } else {
                1.0
            }
        });
        assert_eq!(crossings.sunrise, Some(10));
        assert_eq!(crossings.sunset, Some(40));
    }

    #[test]
    fn test_zero_counts_as_night() {
        // The terminator line itself is not sunlit
        let crossings = scan(|offset| if offset >= 30 { -1.0 } else { 0.0 });
        assert_eq!(crossings.sunrise, Some(30));
        assert_eq!(crossings.sunset, None);
    }

    #[test]
    fn test_minute_conversion_wraps_midnight() {
        assert_eq!(minutes_at_offset(1430, 3), (1430 + 20) % 1440);
        assert_eq!(minutes_at_offset(0, 0), 0);
        assert_eq!(minutes_at_offset(719, 108), 719 + 720);
    }
}
