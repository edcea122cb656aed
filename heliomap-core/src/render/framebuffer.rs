//! 1-bit output frame
//!
//! Row-major, LSB first within each byte, 28 bytes per row: 27 data
//! bytes plus one pad byte so rows start word-aligned. A set bit is a
//! lit pixel.

use crate::astro::tables::{DAY_STEPS, LAT_ROWS};

/// Frame width in pixels, one column per daily-rotation step
pub const MAP_WIDTH: usize = DAY_STEPS;

/// Frame height in pixels
pub const MAP_HEIGHT: usize = LAT_ROWS;

/// Bytes per frame row, alignment padding included
pub const ROW_STRIDE: usize = 28;

/// Total frame size in bytes
pub const FRAME_BYTES: usize = ROW_STRIDE * MAP_HEIGHT;

/// The rendered 1-bit frame
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; FRAME_BYTES],
}

impl FrameBuffer {
    /// Create an all-dark frame
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
        }
    }

    /// Reset every pixel to dark
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Light or darken one pixel
    pub fn set(&mut self, x: usize, y: usize, lit: bool) {
        let byte = y * ROW_STRIDE + x / 8;
        let bit = 1 << (x % 8);
        if lit {
            self.bytes[byte] |= bit;
        } else {
            self.bytes[byte] &= !bit;
        }
    }

    /// Whether the pixel at (x, y) is lit
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.bytes[y * ROW_STRIDE + x / 8] & (1 << (x % 8)) != 0
    }

    /// The packed frame, stride included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// One packed row, stride included
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bytes[y * ROW_STRIDE..(y + 1) * ROW_STRIDE]
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
