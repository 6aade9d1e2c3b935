use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::foundation::math::{clamp_channel, trunc_i64};

/// Pixel dimensions of a generated image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// The fixed 500x500 output size.
    pub const DEFAULT: Self = Self {
        width: 500,
        height: 500,
    };

    /// Build a size, rejecting zero-area canvases.
    pub fn new(width: u32, height: u32) -> TuneprintResult<Self> {
        if width == 0 || height == 0 {
            return Err(TuneprintError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by this size.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` addresses a pixel inside the canvas.
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Straight 8-bit RGB pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Build a pixel from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Integer RGB triple that is allowed to leave the `[0, 255]` gamut.
///
/// Palette colors derived from out-of-range attributes land here; they are only clamped when
/// written to a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RawRgb {
    /// Red.
    pub r: i64,
    /// Green.
    pub g: i64,
    /// Blue.
    pub b: i64,
}

impl RawRgb {
    /// Build a raw triple from real-valued channels, truncating each toward zero.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: trunc_i64(r),
            g: trunc_i64(g),
            b: trunc_i64(b),
        }
    }

    /// Scale every channel by `k`, truncating toward zero.
    pub fn scaled(self, k: f64) -> Self {
        Self::from_f64(self.r as f64 * k, self.g as f64 * k, self.b as f64 * k)
    }

    /// Clamp into a writable pixel.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: clamp_channel(self.r),
            g: clamp_channel(self.g),
            b: clamp_channel(self.b),
        }
    }
}

impl From<Rgb8> for RawRgb {
    fn from(px: Rgb8) -> Self {
        Self {
            r: i64::from(px.r),
            g: i64::from(px.g),
            b: i64::from(px.b),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
