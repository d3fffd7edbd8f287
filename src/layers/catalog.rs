//! Built-in layer catalog
//!
//! Nine layers in index order. The sequence store composes active layers
//! in this order, so reordering the table changes rendered output.

use super::{Color, Layer};
use crate::error::{Result, TesseraError};

/// Number of layers the sequence store can track
pub const CATALOG_SIZE: usize = 9;

const LIGHTEN_STEP: u8 = 40;
const DARKEN_STEP: u8 = 40;

// ============================================================================
// Transforms
// ============================================================================

/// Hue cycles across the grid diagonal and drifts with time
fn rainbow(_: Color, timestamp: u64, x: usize, y: usize) -> Color {
    let hue = ((x as u64 + y as u64) * 24 + timestamp / 10) % 360;
    hue_to_rgb(hue as u16)
}

fn black(_: Color, _: u64, _: usize, _: usize) -> Color {
    Color::BLACK
}

fn lighten(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.lightened(LIGHTEN_STEP)
}

fn invert(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.inverted()
}

fn red(color: Color, _: u64, _: usize, _: usize) -> Color {
    Color::rgb(255, color.g, color.b)
}

fn green(color: Color, _: u64, _: usize, _: usize) -> Color {
    Color::rgb(color.r, 255, color.b)
}

fn blue(color: Color, _: u64, _: usize, _: usize) -> Color {
    Color::rgb(color.r, color.g, 255)
}

/// Deterministic glints: roughly one cell in five flashes white per tick
fn sparkle(color: Color, timestamp: u64, x: usize, y: usize) -> Color {
    let seed = (x as u64).wrapping_mul(31) ^ (y as u64).wrapping_mul(17) ^ (timestamp / 100);
    if seed % 5 == 0 {
        Color::WHITE
    } else {
        color
    }
}

fn darken(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.darkened(DARKEN_STEP)
}

/// Full-saturation, full-value HSV to RGB
fn hue_to_rgb(hue: u16) -> Color {
    let sector = hue / 60;
    let rising = ((hue % 60) as u32 * 255 / 60) as u8;
    let falling = 255 - rising;
    match sector {
        0 => Color::rgb(255, rising, 0),
        1 => Color::rgb(falling, 255, 0),
        2 => Color::rgb(0, 255, rising),
        3 => Color::rgb(0, falling, 255),
        4 => Color::rgb(rising, 0, 255),
        _ => Color::rgb(255, 0, falling),
    }
}

// ============================================================================
// Catalog
// ============================================================================

static CATALOG: [Layer; CATALOG_SIZE] = [
    Layer::new(0, "rainbow", rainbow),
    Layer::new(1, "black", black),
    Layer::new(2, "lighten", lighten),
    Layer::new(3, "invert", invert),
    Layer::new(4, "red", red),
    Layer::new(5, "green", green),
    Layer::new(6, "blue", blue),
    Layer::new(7, "sparkle", sparkle),
    Layer::new(8, "darken", darken),
];

/// All built-in layers in index order
pub fn catalog() -> &'static [Layer] {
    &CATALOG
}

pub fn layer_by_index(index: usize) -> Option<Layer> {
    CATALOG.get(index).copied()
}

/// Look up a built-in layer by name (case-insensitive)
pub fn layer_by_name(name: &str) -> Result<Layer> {
    CATALOG
        .iter()
        .find(|layer| layer.name.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| TesseraError::UnknownLayer {
            name: name.to_string(),
        })
}
