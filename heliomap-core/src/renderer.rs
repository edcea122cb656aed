//! Renderer facade
//!
//! Owns the tables, the mask, the settings and all mutable render state:
//! the solar offsets, the derived home position, the frame and its dirty
//! flag. Hosts feed wall clock ticks in and take frames out; nothing in
//! here is global.

use crate::astro::{AngleTables, SolarGeometry, SolarState, WallClock};
use crate::render::{composite, FrameBuffer, WorldMask};
use crate::settings::{HomePosition, HomeSettings, SettingsError};
use crate::sun::{scan, SunReport};

/// The solar illumination renderer
pub struct Renderer {
    tables: AngleTables,
    mask: WorldMask,
    settings: HomeSettings,
    home: HomePosition,
    clock: WallClock,
    solar: SolarState,
    frame: FrameBuffer,
    dirty: bool,
}

impl Renderer {
    /// Create a renderer for a world mask and home settings
    pub fn new(mask: WorldMask, settings: HomeSettings) -> Self {
        let clock = WallClock::default();
        Self {
            tables: AngleTables::new(),
            mask,
            home: settings.home_position(),
            solar: SolarState::compute(clock, settings.timezone_half_hours),
            settings,
            clock,
            frame: FrameBuffer::new(),
            dirty: true,
        }
    }

    /// Feed a new home-local wall clock
    ///
    /// Marks the frame stale only when the derived solar state actually
    /// moved, so ticks inside one rotation step cost nothing.
    pub fn update_time(&mut self, clock: WallClock) {
        self.clock = clock;
        let solar = SolarState::compute(clock, self.settings.timezone_half_hours);
        if solar != self.solar {
            self.solar = solar;
            self.dirty = true;
        }
    }

    /// Replace the home settings, rederiving position and rotation
    ///
    /// Out-of-range values are rejected here so the render path never
    /// re-checks them.
    pub fn apply_settings(&mut self, settings: HomeSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        self.home = settings.home_position();
        self.solar = SolarState::compute(self.clock, settings.timezone_half_hours);
        self.dirty = true;
        Ok(())
    }

    /// Current settings
    pub fn settings(&self) -> &HomeSettings {
        &self.settings
    }

    /// Home position on the map
    pub fn home(&self) -> HomePosition {
        self.home
    }

    /// Whether the next render will recomposite the frame
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force the next render to recomposite
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The last composited frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Recomposite the frame if stale, then solve the home row's
    /// sunrise/sunset when `overlay` asks for it
    pub fn render(&mut self, overlay: bool) -> (&FrameBuffer, Option<SunReport>) {
        let geometry = SolarGeometry::new(&self.tables, self.solar.day_of_year);
        let rotation = self.solar.rotation();

        if self.dirty {
            composite(&mut self.frame, &self.mask, &geometry, rotation);
            self.dirty = false;
        }

        let report = if overlay {
            let base = self.home.col as i32 + rotation;
            let row = self.home.row as usize;
            let crossings = scan(|offset| geometry.illumination(base + offset as i32, row));
            Some(SunReport::from_crossings(crossings, self.clock.minute_of_day()))
        } else {
            None
        };

        (&self.frame, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MAP_HEIGHT, MAP_WIDTH};
    use crate::sun::ClockStyle;

    fn stripe_mask() -> WorldMask {
        let mut mask = WorldMask::default();
        for y in 0..MAP_HEIGHT {
            for x in (0..MAP_WIDTH).step_by(4) {
                mask.set(x, y, true);
            }
        }
        mask
    }

    #[test]
    fn test_dirty_flag_protocol() {
        let mut renderer = Renderer::new(WorldMask::default(), HomeSettings::default());
        assert!(renderer.is_dirty());

        let (_, report) = renderer.render(false);
        assert!(report.is_none());
        assert!(!renderer.is_dirty());

        // The same clock changes nothing
        renderer.update_time(WallClock::default());
        assert!(!renderer.is_dirty());

        // A jump of several minutes lands in a new rotation step
        renderer.update_time(WallClock::new(0, 30, 0));
        assert!(renderer.is_dirty());
    }

    #[test]
    fn test_tick_below_step_resolution_stays_clean() {
        let mut renderer = Renderer::new(WorldMask::default(), HomeSettings::default());
        renderer.render(false);
        // One minute is finer than the 6 2/3 minute step
        renderer.update_time(WallClock::new(0, 1, 0));
        assert!(!renderer.is_dirty());
    }

    #[test]
    fn test_render_stable_across_mark_dirty() {
        let mut renderer = Renderer::new(stripe_mask(), HomeSettings::default());
        renderer.update_time(WallClock::new(9, 15, 120));
        let first = renderer.render(false).0.clone();
        renderer.mark_dirty();
        let (second, _) = renderer.render(false);
        assert!(first == *second);
    }

    #[test]
    fn test_settings_change_moves_home_and_dirties() {
        let mut renderer = Renderer::new(WorldMask::default(), HomeSettings::default());
        assert_eq!(renderer.home(), HomePosition { col: 34, row: 49 });
        renderer.render(false);

        let moved = HomeSettings {
            latitude: 0,
            longitude: 0,
            ..HomeSettings::default()
        };
        renderer.apply_settings(moved).unwrap();
        assert_eq!(renderer.home(), HomePosition { col: 108, row: 84 });
        assert!(renderer.is_dirty());
        assert_eq!(renderer.settings().latitude, 0);
    }

    #[test]
    fn test_apply_settings_rejects_out_of_range() {
        let mut renderer = Renderer::new(WorldMask::default(), HomeSettings::default());
        renderer.render(false);

        let bad = HomeSettings {
            longitude: 200,
            ..HomeSettings::default()
        };
        assert_eq!(
            renderer.apply_settings(bad),
            Err(crate::settings::SettingsError::Longitude)
        );
        // The renderer keeps its previous settings and stays clean
        assert_eq!(renderer.settings().longitude, -122);
        assert!(!renderer.is_dirty());
    }

    #[test]
    fn test_summer_noon_on_the_west_coast() {
        // Home 37N 122W at UTC-8, June 21st, noon: sunrise lands before
        // 07:00 and sunset after 19:00, at 05:40 and 20:45 with the
        // pinned tables.
        let mut renderer = Renderer::new(WorldMask::default(), HomeSettings::default());
        renderer.update_time(WallClock::new(12, 0, 172));
        let (_, report) = renderer.render(true);
        let report = report.unwrap();

        let rise = report.sunrise_min.unwrap();
        let set = report.sunset_min.unwrap();
        assert!(rise < 7 * 60, "sunrise at minute {rise}");
        assert!(set > 19 * 60, "sunset at minute {set}");
        assert_eq!(rise, 5 * 60 + 40);
        assert_eq!(set, 20 * 60 + 45);
    }

    #[test]
    fn test_polar_night_reports_sentinel() {
        let settings = HomeSettings {
            latitude: 89,
            ..HomeSettings::default()
        };
        let mut renderer = Renderer::new(WorldMask::default(), settings);
        renderer.update_time(WallClock::new(12, 0, 355));
        let (_, report) = renderer.render(true);
        let report = report.unwrap();

        assert_eq!(report.sunrise_min, None);
        assert_eq!(report.sunset_min, None);
        assert_eq!(report.format(ClockStyle::H24).as_str(), "No sunrise/sunset");
    }

    #[test]
    fn test_frame_survives_between_renders() {
        let mut renderer = Renderer::new(stripe_mask(), HomeSettings::default());
        renderer.update_time(WallClock::new(18, 0, 200));
        let rendered = renderer.render(false).0.clone();
        assert!(rendered == *renderer.frame());
    }
}
