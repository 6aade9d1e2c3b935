use crate::foundation::core::CanvasSize;
use crate::foundation::error::TuneprintResult;
use crate::profile::model::MusicProfile;
use crate::render::canvas::Canvas;
use crate::render::compose::{apply_radial_glow, apply_rhythm_lines, rasterize_base};
use crate::render::text::TextAnnotator;
use crate::synth::noise_field::NoiseField;
use crate::synth::palette::Palette;
use crate::synth::seed::SeedSet;

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorOpts {
    /// Output dimensions (500x500 by default).
    pub size: CanvasSize,
    /// Burn the score/timestamp captions into the image.
    pub annotate: bool,
}

impl Default for GeneratorOpts {
    fn default() -> Self {
        Self {
            size: CanvasSize::DEFAULT,
            annotate: true,
        }
    }
}

/// Turns a [`MusicProfile`] into a [`Canvas`].
///
/// Generation is a pure function of the profile (and, for captions, of the installed fonts and
/// local timezone): the same profile always yields the same pixels.
#[derive(Debug)]
pub struct Generator {
    opts: GeneratorOpts,
    annotator: Option<TextAnnotator>,
}

impl Generator {
    /// Build a generator; loads the system fonts when captions are enabled.
    pub fn new(opts: GeneratorOpts) -> Self {
        let annotator = opts.annotate.then(TextAnnotator::with_system_fonts);
        Self { opts, annotator }
    }

    /// Build a generator with an explicit caption renderer.
    pub fn with_annotator(size: CanvasSize, annotator: TextAnnotator) -> Self {
        Self {
            opts: GeneratorOpts {
                size,
                annotate: true,
            },
            annotator: Some(annotator),
        }
    }

    /// Configuration in use.
    pub fn opts(&self) -> GeneratorOpts {
        self.opts
    }

    /// Run every pass for `profile` and return the finished canvas.
    #[tracing::instrument(skip(self, profile), fields(timestamp = profile.timestamp))]
    pub fn generate(&self, profile: &MusicProfile) -> TuneprintResult<Canvas> {
        let seeds = SeedSet::derive(profile);
        let field = NoiseField::new(&seeds);
        let palette = Palette::from_profile(profile);

        let mut canvas = Canvas::new(self.opts.size);
        rasterize_base(&mut canvas, &field, &palette, profile.valence);
        let glows = apply_radial_glow(&mut canvas, &seeds, &palette, profile.energy);
        let lines = apply_rhythm_lines(&mut canvas, &seeds, profile.danceability);
        let captioned = match &self.annotator {
            Some(annotator) => annotator.annotate(&mut canvas, profile)?,
            None => 0,
        };

        tracing::debug!(
            seed = seeds.base,
            glows,
            lines,
            captioned,
            "composed canvas"
        );
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
