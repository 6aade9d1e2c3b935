use crate::foundation::core::{CanvasSize, RawRgb, Rgb8};
use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::foundation::math::lerp_trunc;

/// Owned RGB8 pixel buffer for one generated image.
///
/// Row-major, 3 bytes per pixel, `data.len() == width * height * 3`. Every write clamps channels
/// to `[0, 255]`; writes outside the canvas are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    data: Vec<u8>,
}

impl Canvas {
    /// A black canvas of `size`.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            data: vec![0; size.pixel_count() * 3],
        }
    }

    /// Wrap an existing RGB8 buffer.
    pub fn from_raw(size: CanvasSize, data: Vec<u8>) -> TuneprintResult<Self> {
        if data.len() != size.pixel_count() * 3 {
            return Err(TuneprintError::validation(format!(
                "rgb8 buffer length {} does not match {}x{}",
                data.len(),
                size.width,
                size.height
            )));
        }
        Ok(Self { size, data })
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw RGB8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas into its RGB8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        self.size
            .contains(x, y)
            .then(|| (y as usize * self.size.width as usize + x as usize) * 3)
    }

    /// Pixel at `(x, y)`, `None` outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        let i = self.offset(x, y)?;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Write `color` clamped to gamut. Returns whether a pixel was touched.
    pub fn put(&mut self, x: i64, y: i64, color: RawRgb) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        self.data[i..i + 3].copy_from_slice(&color.to_rgb8().to_array());
        true
    }

    /// Linearly move the pixel toward `target` by `t` (`0` keeps it, `1` replaces it).
    ///
    /// Channels are truncated toward zero, then clamped.
    pub fn blend_toward(&mut self, x: i64, y: i64, target: RawRgb, t: f64) -> bool {
        let Some(cur) = self.get(x, y) else {
            return false;
        };
        let cur = RawRgb::from(cur);
        let mixed = RawRgb {
            r: lerp_trunc(cur.r, target.r, t),
            g: lerp_trunc(cur.g, target.g, t),
            b: lerp_trunc(cur.b, target.b, t),
        };
        self.put(x, y, mixed)
    }

    /// Copy into an `image` buffer for encoding.
    pub fn to_rgb_image(&self) -> TuneprintResult<image::RgbImage> {
        image::RgbImage::from_raw(self.size.width, self.size.height, self.data.clone())
            .ok_or_else(|| TuneprintError::render("canvas buffer does not fit its dimensions"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
