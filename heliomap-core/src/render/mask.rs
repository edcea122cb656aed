//! Static land/water mask
//!
//! 216x168, one bit per pixel, bit set = land. Bits are addressed as one
//! continuous LSB-first stream (27 tightly packed bytes per row, no
//! stride padding), matching the layout of the map asset.

use super::framebuffer::{MAP_HEIGHT, MAP_WIDTH};

/// Bytes per mask row, 216 bits exactly
pub const MASK_ROW_BYTES: usize = MAP_WIDTH / 8;

/// Total mask size in bytes
pub const MASK_BYTES: usize = MASK_ROW_BYTES * MAP_HEIGHT;

/// Errors from mask construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaskError {
    /// Byte slice does not hold exactly 216x168 bits
    Length,
}

/// Land/water bitmap consumed by the compositor
#[derive(Clone)]
pub struct WorldMask {
    bits: [u8; MASK_BYTES],
}

impl WorldMask {
    /// Wrap a packed 216x168 bitmap (bit set = land)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MaskError> {
        if bytes.len() != MASK_BYTES {
            return Err(MaskError::Length);
        }
        let mut bits = [0; MASK_BYTES];
        bits.copy_from_slice(bytes);
        Ok(Self { bits })
    }

    /// Whether the pixel at (x, y) is land
    pub fn is_land(&self, x: usize, y: usize) -> bool {
        let addr = y * MAP_WIDTH + x;
        self.bits[addr / 8] & (1 << (addr % 8)) != 0
    }

    /// Mark one pixel land or water, for mask construction
    pub fn set(&mut self, x: usize, y: usize, land: bool) {
        let addr = y * MAP_WIDTH + x;
        let bit = 1 << (addr % 8);
        if land {
            self.bits[addr / 8] |= bit;
        } else {
            self.bits[addr / 8] &= !bit;
        }
    }

    /// The packed mask bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl Default for WorldMask {
    /// An all-water mask
    fn default() -> Self {
        Self {
            bits: [0; MASK_BYTES],
        }
    }
}
