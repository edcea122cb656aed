//! Braille rendering of the 1-bit frame
//!
//! Each terminal cell shows a 2x4 pixel block as one braille character,
//! U+2800 plus the dot mask, so the full 216x168 frame fits in 108x42
//! cells.

use heliomap_core::render::{FrameBuffer, MAP_HEIGHT, MAP_WIDTH};

/// Terminal columns for a full frame
pub const CELL_COLS: usize = MAP_WIDTH / 2;

/// Terminal rows for a full frame
pub const CELL_ROWS: usize = MAP_HEIGHT / 4;

/// Dot bit for a pixel offset inside the 2x4 cell
fn braille_bit(dx: usize, dy: usize) -> u8 {
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (0, 3) => 0x40,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Character for a dot mask
fn braille_char(mask: u8) -> char {
    char::from_u32(0x2800 + mask as u32).unwrap_or(' ')
}

/// Render the frame as [`CELL_ROWS`] lines of [`CELL_COLS`] characters
pub fn frame_lines(frame: &FrameBuffer) -> Vec<String> {
    let mut lines = Vec::with_capacity(CELL_ROWS);
    for cy in 0..CELL_ROWS {
        let mut line = String::with_capacity(CELL_COLS * 3);
        for cx in 0..CELL_COLS {
            let mut mask = 0u8;
            for dy in 0..4 {
                for dx in 0..2 {
                    if frame.is_lit(cx * 2 + dx, cy * 4 + dy) {
                        mask |= braille_bit(dx, dy);
                    }
                }
            }
            line.push(braille_char(mask));
        }
        lines.push(line);
    }
    lines
}
