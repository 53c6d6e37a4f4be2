//! Chart color tokens and the overlay palette.
//!
//! One fixed indexed palette plus three named entries (primary, teal,
//! purple) that the assignment policy special-cases. `Color(0)` is the
//! "unset" sentinel — the policy never skips it, so tests that don't care
//! about colors can pass it as the ignore value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Sentinel for "no color chosen".
    pub const UNSET: Color = Color(0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Palette contract consumed by the chart model: named entries plus an
/// indexed overlay sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    /// Default series color (price line, volume bars).
    pub primary: Color,
    /// Palette entry that clashes with the volume default.
    pub teal: Color,
    /// Substitute used on volume charts when the walk lands on teal.
    pub purple: Color,
    overlays: Vec<Color>,
}

impl ChartColors {
    pub fn new(primary: Color, teal: Color, purple: Color, overlays: Vec<Color>) -> Self {
        Self {
            primary,
            teal,
            purple,
            overlays,
        }
    }

    /// Overlay palette entry at `index`, wrapping past the end.
    pub fn overlay_color(&self, index: usize) -> Color {
        self.overlays[index % self.overlays.len()]
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

impl Default for ChartColors {
    /// Material-ish defaults. Teal and purple are both members of the
    /// overlay walk, so the volume substitution is reachable.
    fn default() -> Self {
        let teal = Color::rgb(0x00, 0x96, 0x88);
        let purple = Color::rgb(0x9C, 0x27, 0xB0);
        Self {
            primary: Color::rgb(0x21, 0x96, 0xF3),
            teal,
            purple,
            overlays: vec![
                Color::rgb(0xFF, 0x98, 0x00), // orange
                Color::rgb(0x4C, 0xAF, 0x50), // green
                Color::rgb(0xF4, 0x43, 0x36), // red
                teal,
                purple,
                Color::rgb(0xFF, 0xC1, 0x07), // amber
                Color::rgb(0xE9, 0x1E, 0x63), // pink
                Color::rgb(0x3F, 0x51, 0xB5), // indigo
            ],
        }
    }
}
