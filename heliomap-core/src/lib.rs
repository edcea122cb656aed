//! Day/night world map rendering core
//!
//! Renders a 216x168 equirectangular world map shaded by real-time solar
//! illumination, entirely with small lookup tables and f32 arithmetic:
//!
//! - [`astro`]: precomputed angle tables, the solar position model with
//!   its equation-of-time correction, and the per-pixel illumination field
//! - [`render`]: the 1-bit frame, the land/water mask and the dithered
//!   compositor that combines them
//! - [`sun`]: the terminator crossing scan that turns the same
//!   illumination field into home sunrise/sunset times
//! - [`settings`]: validated home location settings with the wrap and
//!   clamp semantics of the reference device UI
//! - [`renderer`]: the facade owning all render state behind a dirty flag
//!
//! The crate is `no_std` and allocation-free. Hosts feed in wall clock
//! ticks, present the finished [`render::FrameBuffer`] and display the
//! formatted [`sun::SunReport`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod astro;
pub mod render;
pub mod renderer;
pub mod settings;
pub mod sun;

pub use renderer::Renderer;
