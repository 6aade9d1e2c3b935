use std::sync::Arc;

use crate::foundation::core::RawRgb;
use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::foundation::math::mul_div255;
use crate::profile::model::MusicProfile;
use crate::render::canvas::Canvas;

const FONT_SIZE: f32 = 14.0;
const MARGIN_LEFT: u32 = 10;
const LINE_HEIGHT: u32 = 18;
const BASELINE_FROM_BOTTOM: u32 = 12;
const TEXT_OPACITY: f32 = 0.7;

/// Burns the score and timestamp captions into a canvas.
///
/// Captions go through an SVG text layer rasterized by `resvg` and are composited source-over;
/// pixels without glyph coverage are left untouched. If no usable font is installed the layer
/// renders empty and the pass changes nothing.
#[derive(Clone)]
pub struct TextAnnotator {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextAnnotator {
    /// Annotator backed by the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::from_fontdb(db)
    }

    /// Annotator over a prepared font database.
    pub fn from_fontdb(db: usvg::fontdb::Database) -> Self {
        tracing::debug!(faces = db.len(), "annotation font database ready");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Caption lines for `profile`, top to bottom.
    pub fn captions(profile: &MusicProfile) -> [String; 2] {
        let when = profile
            .local_time()
            .map(|t| t.format("%c").to_string())
            .unwrap_or_else(|| format!("{}", profile.timestamp));
        [format!("Score: {}/100", format_score(profile.unique_score)), when]
    }

    /// Composite the captions onto `canvas`. Returns the number of pixels touched.
    pub fn annotate(&self, canvas: &mut Canvas, profile: &MusicProfile) -> TuneprintResult<usize> {
        let (w, h) = (canvas.width(), canvas.height());
        let svg = caption_svg(w, h, &Self::captions(profile));

        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: caption_font_resolver(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| TuneprintError::render(format!("parse caption svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
            .ok_or_else(|| TuneprintError::render("failed to allocate caption pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(composite_premul_over(canvas, pixmap.data()))
    }
}

impl std::fmt::Debug for TextAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnnotator")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

/// Whole scores print without a fraction (`85`), others with one decimal.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn caption_svg(w: u32, h: u32, lines: &[String; 2]) -> String {
    let y_last = h.saturating_sub(BASELINE_FROM_BOTTOM);
    let y_first = y_last.saturating_sub(LINE_HEIGHT);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><g font-family="sans-serif" font-size="{FONT_SIZE}" fill="#ffffff" fill-opacity="{TEXT_OPACITY}"><text x="{MARGIN_LEFT}" y="{y_first}">{}</text><text x="{MARGIN_LEFT}" y="{y_last}">{}</text></g></svg>"##,
        escape_xml(&lines[0]),
        escape_xml(&lines[1]),
    )
}

/// Prefer a sans face, then anything installed, so captions render on minimal systems.
fn caption_font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let families = [
                usvg::fontdb::Family::SansSerif,
                usvg::fontdb::Family::Serif,
                usvg::fontdb::Family::Monospace,
            ];
            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Source-over of a premultiplied RGBA8 layer onto the RGB canvas.
fn composite_premul_over(canvas: &mut Canvas, layer: &[u8]) -> usize {
    let w = i64::from(canvas.width());
    let mut touched = 0;
    for (i, px) in layer.chunks_exact(4).enumerate() {
        let a = u16::from(px[3]);
        if a == 0 {
            continue;
        }
        let (x, y) = (i as i64 % w, i as i64 / w);
        let Some(dst) = canvas.get(x, y) else {
            continue;
        };
        let inv = 255 - a;
        let over = |s: u8, d: u8| i64::from(u16::from(s) + mul_div255(u16::from(d), inv));
        canvas.put(
            x,
            y,
            RawRgb {
                r: over(px[0], dst.r),
                g: over(px[1], dst.g),
                b: over(px[2], dst.b),
            },
        );
        touched += 1;
    }
    touched
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
