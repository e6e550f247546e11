//! Colour ramp for RCS pattern plots.

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` hex form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Maps a normalized RCS (0 = weakest, 1 = strongest) onto a five-band
/// blue → cyan → green → yellow → red ramp.
///
/// Inputs outside `[0, 1]` are clamped.
pub fn rcs_color(normalized: f64) -> Rgb {
    let n = if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    };
    // Ramp position within the current 0.2-wide band, scaled to 0..=255
    let ramp = |start: f64| (255.0 * (n - start) * 5.0) as u8;

    if n < 0.2 {
        Rgb::new(0, ramp(0.0), 255)
    } else if n < 0.4 {
        Rgb::new(0, 255, 255 - ramp(0.2))
    } else if n < 0.6 {
        Rgb::new(ramp(0.4), 255, 0)
    } else if n < 0.8 {
        Rgb::new(255, 255 - ramp(0.6), 0)
    } else {
        Rgb::new(255, 0, 0)
    }
}
