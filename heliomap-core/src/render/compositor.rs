//! Dithered day/night compositor
//!
//! Combines the land/water mask with the illumination field into the
//! 1-bit frame. One mask bit fans out into four textures: solid lit land
//! by day, a 3-of-4 dither for land at night, a 2-of-4 checker for water
//! by day, and solid dark water at night.

use super::framebuffer::{FrameBuffer, MAP_HEIGHT, MAP_WIDTH};
use super::mask::WorldMask;
use crate::astro::SolarGeometry;

/// Shade one pixel
///
/// A pure function of the mask bit, the illumination sign and the pixel
/// position; the dither patterns are anchored to absolute frame
/// coordinates so they stay still while the terminator moves.
pub fn pixel_lit(land: bool, sunlit: bool, x: usize, y: usize) -> bool {
    match (land, sunlit) {
        (true, true) => true,
        (true, false) => !(x % 2 == 0 && y % 2 == 0),
        (false, true) => (x + y) % 2 == 0,
        (false, false) => false,
    }
}

/// Run one full illumination pass over the frame
///
/// `rotation` is the composed daily rotation from
/// [`SolarState::rotation`](crate::astro::SolarState::rotation); frame
/// column `x` samples the field at step `x + rotation`. Every pixel is
/// written, so stale frame content never survives a pass.
pub fn composite(
    frame: &mut FrameBuffer,
    mask: &WorldMask,
    geometry: &SolarGeometry<'_>,
    rotation: i32,
) {
    for x in 0..MAP_WIDTH {
        let column = geometry.column(x as i32 + rotation);
        for y in 0..MAP_HEIGHT {
            let lit = pixel_lit(mask.is_land(x, y), column.sunlit(y), x, y);
            frame.set(x, y, lit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::AngleTables;

    #[test]
    fn test_solid_shades() {
        for x in 0..8 {
            for y in 0..8 {
                assert!(pixel_lit(true, true, x, y));
                assert!(!pixel_lit(false, false, x, y));
            }
        }
    }

    #[test]
    fn test_night_land_is_three_of_four() {
        for bx in (0..MAP_WIDTH).step_by(2) {
            for by in (0..MAP_HEIGHT).step_by(2) {
                let lit = [(0, 0), (1, 0), (0, 1), (1, 1)]
                    .into_iter()
                    .filter(|&(dx, dy)| pixel_lit(true, false, bx + dx, by + dy))
                    .count();
                assert_eq!(lit, 3);
            }
        }
    }

    #[test]
    fn test_day_water_is_two_of_four() {
        for bx in (0..MAP_WIDTH).step_by(2) {
            for by in (0..MAP_HEIGHT).step_by(2) {
                let lit = [(0, 0), (1, 0), (0, 1), (1, 1)]
                    .into_iter()
                    .filter(|&(dx, dy)| pixel_lit(false, true, bx + dx, by + dy))
                    .count();
                assert_eq!(lit, 2);
            }
        }
    }

    #[test]
    fn test_shade_ordering_never_inverts() {
        // At any position, land never renders darker than water under
        // the same illumination, and day never darker than night on the
        // same surface.
        for x in 0..4 {
            for y in 0..4 {
                assert!(pixel_lit(true, true, x, y) >= pixel_lit(false, true, x, y));
                assert!(pixel_lit(true, false, x, y) >= pixel_lit(false, false, x, y));
                assert!(pixel_lit(false, true, x, y) >= pixel_lit(false, false, x, y));
            }
        }
    }

    #[test]
    fn test_composite_is_deterministic() {
        let tables = AngleTables::new();
        let geometry = SolarGeometry::new(&tables, 100);
        let mut mask = WorldMask::default();
        for x in 40..80 {
            for y in 30..90 {
                mask.set(x, y, true);
            }
        }

        let mut first = FrameBuffer::new();
        composite(&mut first, &mask, &geometry, 57);
        let mut second = first.clone();
        composite(&mut second, &mask, &geometry, 57);
        assert!(first == second);
    }

    #[test]
    fn test_composite_overwrites_stale_content() {
        let tables = AngleTables::new();
        let geometry = SolarGeometry::new(&tables, 0);
        let mask = WorldMask::default();

        let mut clean = FrameBuffer::new();
        composite(&mut clean, &mask, &geometry, 0);

        let mut stale = FrameBuffer::new();
        for x in 0..MAP_WIDTH {
            stale.set(x, 0, true);
        }
        composite(&mut stale, &mask, &geometry, 0);
        assert!(stale == clean);
    }

    #[test]
    fn test_full_turn_reproduces_the_frame() {
        let tables = AngleTables::new();
        let geometry = SolarGeometry::new(&tables, 90);
        let mut mask = WorldMask::default();
        for x in (0..MAP_WIDTH).step_by(3) {
            for y in 0..MAP_HEIGHT {
                mask.set(x, y, true);
            }
        }

        let mut reference = FrameBuffer::new();
        composite(&mut reference, &mask, &geometry, 57);
        let mut turned = FrameBuffer::new();
        composite(&mut turned, &mask, &geometry, 57 + MAP_WIDTH as i32);
        let mut reversed = FrameBuffer::new();
        composite(&mut reversed, &mask, &geometry, 57 - MAP_WIDTH as i32);

        assert!(turned == reference);
        assert!(reversed == reference);
    }
}
