//! World masks for the terminal front-end
//!
//! A built-in procedural continent layout for out-of-the-box runs, plus
//! binary PBM (P4) input and output so real coastline masks and frame
//! snapshots round-trip through standard image tools.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use heliomap_core::render::{FrameBuffer, WorldMask, MAP_HEIGHT, MAP_WIDTH};

/// Rough continent ellipses: (center lon, center lat, lon radius, lat radius)
const CONTINENTS: &[(f32, f32, f32, f32)] = &[
    (-100.0, 48.0, 38.0, 22.0), // North America
    (-68.0, 14.0, 14.0, 10.0),  // Central America
    (-60.0, -18.0, 22.0, 32.0), // South America
    (18.0, 12.0, 26.0, 24.0),   // northern Africa
    (28.0, -16.0, 18.0, 20.0),  // southern Africa
    (24.0, 52.0, 32.0, 14.0),   // Europe
    (88.0, 48.0, 58.0, 26.0),   // Asia
    (102.0, 16.0, 18.0, 14.0),  // Southeast Asia
    (134.0, -24.0, 22.0, 14.0), // Australia
    (-42.0, 76.0, 14.0, 8.0),   // Greenland
    (0.0, -86.0, 180.0, 4.0),   // Antarctica
];

/// Build the procedural demo world
pub fn demo_world() -> WorldMask {
    let mut mask = WorldMask::default();
    for y in 0..MAP_HEIGHT {
        let lat = 90.0 - (y as f32 + 0.5) * (180.0 / MAP_HEIGHT as f32);
        for x in 0..MAP_WIDTH {
            let lon = (x as f32 + 0.5) * (360.0 / MAP_WIDTH as f32) - 180.0;
            let land = CONTINENTS.iter().any(|&(clon, clat, rlon, rlat)| {
                let dx = (lon - clon) / rlon;
                let dy = (lat - clat) / rlat;
                dx * dx + dy * dy <= 1.0
            });
            mask.set(x, y, land);
        }
    }
    mask
}

/// Read a 216x168 binary PBM (P4) as a world mask
///
/// PBM paints 1 as black ink and the mask reads ink as land. PBM packs
/// bits MSB first while the mask is LSB first, so bit order flips per
/// byte on the way through.
pub fn load_pbm(path: &Path) -> Result<WorldMask> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (width, height, pixels) = parse_pbm(&data)?;
    if width != MAP_WIDTH || height != MAP_HEIGHT {
        bail!("mask must be {MAP_WIDTH}x{MAP_HEIGHT}, got {width}x{height}");
    }

    let row_bytes = MAP_WIDTH / 8;
    let mut mask = WorldMask::default();
    for y in 0..MAP_HEIGHT {
        for x in 0..MAP_WIDTH {
            let byte = pixels[y * row_bytes + x / 8];
            let ink = byte & (0x80 >> (x % 8)) != 0;
            mask.set(x, y, ink);
        }
    }
    Ok(mask)
}

/// Write a frame as binary PBM (P4): lit pixels become white paper, dark
/// pixels black ink
pub fn write_pbm(path: &Path, frame: &FrameBuffer) -> Result<()> {
    let row_bytes = MAP_WIDTH / 8;
    let mut data = Vec::with_capacity(32 + row_bytes * MAP_HEIGHT);
    data.extend_from_slice(format!("P4\n{MAP_WIDTH} {MAP_HEIGHT}\n").as_bytes());
    for y in 0..MAP_HEIGHT {
        for chunk in 0..row_bytes {
            let mut byte = 0u8;
            for bit in 0..8 {
                if !frame.is_lit(chunk * 8 + bit, y) {
                    byte |= 0x80 >> bit;
                }
            }
            data.push(byte);
        }
    }
    fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Split a P4 header from its pixel data
fn parse_pbm(data: &[u8]) -> Result<(usize, usize, &[u8])> {
    // Header: magic, width and height as whitespace separated tokens,
    // with '#' comment lines allowed between them
    let mut fields: Vec<&[u8]> = Vec::new();
    let mut pos = 0;
    while fields.len() < 3 && pos < data.len() {
        while pos < data.len() && data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos < data.len() && data[pos] == b'#' {
            while pos < data.len() && data[pos] != b'\n' {
                pos += 1;
            }
            continue;
        }
        let start = pos;
        while pos < data.len() && !data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos > start {
            fields.push(&data[start..pos]);
        }
    }
    if fields.len() < 3 || fields[0] != b"P4" {
        bail!("not a binary PBM (P4) file");
    }
    let width: usize = std::str::from_utf8(fields[1])?.parse()?;
    let height: usize = std::str::from_utf8(fields[2])?.parse()?;
    if width == 0 || height == 0 || width > 1 << 15 || height > 1 << 15 {
        bail!("PBM dimensions out of range: {width}x{height}");
    }

    // Exactly one whitespace byte separates the header from the pixels
    pos += 1;
    let need = (width + 7) / 8 * height;
    let Some(pixels) = data.get(pos..pos + need) else {
        bail!("PBM pixel data truncated");
    };
    Ok((width, height, pixels))
}
