//! Pixel passes: base raster, radial glows, rhythmic lines.
//!
//! Passes run in that order over one `&mut Canvas`; glows and lines read the pixels left by
//! every earlier write, so they must not be reordered or run concurrently.

use crate::foundation::core::{CanvasSize, RawRgb, Rgb8};
use crate::foundation::math::{floor_i64, trunc_i64};
use crate::render::canvas::Canvas;
use crate::synth::noise_field::NoiseField;
use crate::synth::palette::Palette;
use crate::synth::seed::SeedSet;

/// Glows are drawn only when energy is strictly above this.
pub const GLOW_ENERGY_THRESHOLD: f64 = 0.6;
/// Number of glows drawn for energetic profiles.
pub const GLOW_COUNT: usize = 5;
/// Lines are drawn only when danceability is strictly above this.
pub const LINE_DANCEABILITY_THRESHOLD: f64 = 0.7;
/// Opacity of the white rhythmic lines.
pub const LINE_OPACITY: f64 = 30.0 / 255.0;

/// Brightness multiplier for a field value.
///
/// `value^valence` for positive valence, the value itself otherwise. Negative values are floored
/// at zero before the fractional power.
pub fn intensity(value: f64, valence: f64) -> f64 {
    if valence > 0.0 {
        value.max(0.0).powf(valence)
    } else {
        value
    }
}

/// Fill every pixel from the noise field, in row-major order.
pub fn rasterize_base(canvas: &mut Canvas, field: &NoiseField, palette: &Palette, valence: f64) {
    let (w, h) = (canvas.width(), canvas.height());
    for y in 0..h {
        let ny = f64::from(y) / f64::from(h);
        for x in 0..w {
            let nx = f64::from(x) / f64::from(w);
            let value = field.sample(nx, ny);
            let color = palette.color_for(value).scaled(intensity(value, valence));
            canvas.put(i64::from(x), i64::from(y), color);
        }
    }
}

/// One radial blend toward a palette color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glow {
    /// Center x in pixels.
    pub cx: i64,
    /// Center y in pixels.
    pub cy: i64,
    /// Radius in pixels; the blend factor falls linearly from 1 at the center to 0 here.
    pub radius: i64,
    /// Target color.
    pub color: RawRgb,
}

/// Glows for a profile, in application order. Empty unless `energy > 0.6`.
///
/// Centers stay inside the middle 40% of the canvas.
pub fn glow_layout(size: CanvasSize, seeds: &SeedSet, palette: &Palette, energy: f64) -> Vec<Glow> {
    if energy.is_nan() || energy <= GLOW_ENERGY_THRESHOLD {
        return Vec::new();
    }

    let radius = trunc_i64(50.0 + energy * 50.0);
    (0..GLOW_COUNT)
        .map(|i| {
            let step = i as i64;
            let fx = seeds.cycle(step * 100, 1000) as f64 / 1000.0;
            let fy = seeds.cycle(step * 200, 1000) as f64 / 1000.0;
            Glow {
                cx: trunc_i64(f64::from(size.width) * (0.3 + fx * 0.4)),
                cy: trunc_i64(f64::from(size.height) * (0.3 + fy * 0.4)),
                radius,
                color: palette.color(i),
            }
        })
        .collect()
}

fn apply_glow(canvas: &mut Canvas, glow: &Glow) {
    if glow.radius <= 0 {
        return;
    }
    let size = canvas.size();
    let r = glow.radius as f64;
    // Bounding square [c - radius, c + radius), clipped to the canvas.
    let x0 = glow.cx.saturating_sub(glow.radius).max(0);
    let x1 = glow.cx.saturating_add(glow.radius).min(i64::from(size.width));
    let y0 = glow.cy.saturating_sub(glow.radius).max(0);
    let y1 = glow.cy.saturating_add(glow.radius).min(i64::from(size.height));

    for px in x0..x1 {
        for py in y0..y1 {
            let dx = (px - glow.cx) as f64;
            let dy = (py - glow.cy) as f64;
            let dist = dx.hypot(dy);
            if dist < r {
                canvas.blend_toward(px, py, glow.color, 1.0 - dist / r);
            }
        }
    }
}

/// Apply the energy glows. Returns how many were applied (0 or 5).
pub fn apply_radial_glow(
    canvas: &mut Canvas,
    seeds: &SeedSet,
    palette: &Palette,
    energy: f64,
) -> usize {
    let glows = glow_layout(canvas.size(), seeds, palette, energy);
    for glow in &glows {
        apply_glow(canvas, glow);
    }
    glows.len()
}

/// A full-span rhythmic line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RhythmLine {
    /// Full-width line at row `y`.
    Horizontal {
        /// Row.
        y: i64,
    },
    /// Full-height line at column `x`.
    Vertical {
        /// Column.
        x: i64,
    },
}

/// Blends toward white after which no 8-bit channel changes any more.
const LINE_BLEND_SATURATION: u32 = 256;

/// `5 + floor(danceability * 10)`, saturating for huge inputs.
pub fn line_count(danceability: f64) -> usize {
    usize::try_from(floor_i64(danceability * 10.0).saturating_add(5)).unwrap_or(0)
}

/// Lines for a profile, in drawing order. Empty unless `danceability > 0.7`.
///
/// Line `i` sits at `i * width / line_count`; even `base + i` draws it horizontally.
pub fn line_layout(
    size: CanvasSize,
    seeds: &SeedSet,
    danceability: f64,
) -> impl Iterator<Item = RhythmLine> {
    let count = if danceability > LINE_DANCEABILITY_THRESHOLD {
        line_count(danceability)
    } else {
        0
    };
    let spacing = f64::from(size.width) / count.max(1) as f64;
    let seeds = *seeds;
    (0..count).map(move |i| {
        let pos = trunc_i64(i as f64 * spacing);
        if seeds.cycle(i as i64, 2) == 0 {
            RhythmLine::Horizontal { y: pos }
        } else {
            RhythmLine::Vertical { x: pos }
        }
    })
}

fn white() -> RawRgb {
    RawRgb::from(Rgb8::WHITE)
}

fn blend_white(canvas: &mut Canvas, x: i64, y: i64, times: u32) {
    let mut current = canvas.get(x, y);
    for _ in 0..times {
        canvas.blend_toward(x, y, white(), LINE_OPACITY);
        let next = canvas.get(x, y);
        if next == current {
            break;
        }
        current = next;
    }
}

/// Apply the danceability lines. Returns how many lines the profile asks for.
///
/// Every line applies the same blend, so a pixel only depends on how many lines cross it. Crossings
/// are tallied per row and column and capped where the blend reaches its fixed point.
pub fn apply_rhythm_lines(canvas: &mut Canvas, seeds: &SeedSet, danceability: f64) -> usize {
    if danceability.is_nan() || danceability <= LINE_DANCEABILITY_THRESHOLD {
        return 0;
    }
    let size = canvas.size();
    let count = line_count(danceability);
    let (w, h) = (size.width as usize, size.height as usize);
    let mut rows = vec![0u32; h];
    let mut cols = vec![0u32; w];

    // Dense enough that every position gets a saturating run of both orientations.
    if count / w > 2 * LINE_BLEND_SATURATION as usize + 2 {
        rows[..w.min(h)].fill(LINE_BLEND_SATURATION);
        cols.fill(LINE_BLEND_SATURATION);
    } else {
        for line in line_layout(size, seeds, danceability) {
            let slot = match line {
                RhythmLine::Horizontal { y } => usize::try_from(y).ok().and_then(|y| rows.get_mut(y)),
                RhythmLine::Vertical { x } => usize::try_from(x).ok().and_then(|x| cols.get_mut(x)),
            };
            if let Some(n) = slot {
                *n = (*n + 1).min(LINE_BLEND_SATURATION);
            }
        }
    }

    for (y, &across) in rows.iter().enumerate() {
        for (x, &down) in cols.iter().enumerate() {
            let times = (across + down).min(LINE_BLEND_SATURATION);
            if times > 0 {
                blend_white(canvas, x as i64, y as i64, times);
            }
        }
    }
    count
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
