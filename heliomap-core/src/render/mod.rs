//! Frame composition
//!
//! The 1-bit frame, the static land/water mask and the dithered
//! compositor that combines them with the illumination field.

pub mod compositor;
pub mod framebuffer;
pub mod mask;

pub use compositor::{composite, pixel_lit};
pub use framebuffer::{FrameBuffer, FRAME_BYTES, MAP_HEIGHT, MAP_WIDTH, ROW_STRIDE};
pub use mask::{MaskError, WorldMask, MASK_BYTES, MASK_ROW_BYTES};
