//! Tuneprint turns a listener's music profile into a deterministic abstract image.
//!
//! A [`MusicProfile`] (energy, valence, danceability, acousticness, a uniqueness score and a
//! timestamp) is rendered into a [`Canvas`] by the [`Generator`], then persisted as
//! `{user_id}.png` plus `{user_id}_metadata.json` by the [`OutputStore`].
//!
//! # Pipeline overview
//!
//! 1. **Seed**: `MusicProfile -> SeedSet` (one base seed, three generator seeds)
//! 2. **Field**: `SeedSet -> NoiseField` (three fBm layers summed at doubling frequencies)
//! 3. **Compose**: base raster, radial glows (high energy), rhythmic lines (high danceability),
//!    then the score/time captions
//! 4. **Persist** (optional): PNG and JSON sidecar in a flat output directory
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: equal profiles produce byte-identical pixels. Unseeded randomness only
//!   enters through [`random_profile`], which takes its RNG from the caller.
//! - **Clamp outputs, not inputs**: attributes are never validated; every pixel write is clamped
//!   to `[0, 255]`.
//!
//! # Getting started
//!
//! ```no_run
//! use tuneprint::{Generator, GeneratorOpts, ImageMetadata, MusicProfile, OutputStore};
//!
//! # fn main() -> tuneprint::TuneprintResult<()> {
//! let profile = MusicProfile {
//!     energy: 0.9,
//!     valence: 0.8,
//!     danceability: 0.85,
//!     acousticness: 0.1,
//!     unique_score: 85.0,
//!     timestamp: 1_700_000_000.0,
//! };
//! let canvas = Generator::new(GeneratorOpts::default()).generate(&profile)?;
//! let meta = ImageMetadata::new("demo_user_1", &profile, chrono::Local::now());
//! OutputStore::new("output").save("demo_user_1", &canvas, &meta)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;
mod output;
mod profile;
mod render;
mod synth;

pub use foundation::core::{CanvasSize, RawRgb, Rgb8};
pub use foundation::error::{TuneprintError, TuneprintResult};
pub use output::batch::{
    BatchOpts, BatchReport, DEFAULT_TRIGGER_FILE, TriggerRequest, generate_and_save,
    process_trigger_file, run_demo_batch,
};
pub use output::store::{OutputStore, SavedImage, ensure_dir, validate_user_id};
pub use profile::fabricate::{
    DemoProfile, current_user_id, default_user_id, demo_profiles, random_profile,
};
pub use profile::features::{
    AudioFeatures, FeatureAverages, aggregate_profile, unique_score, uniqueness_factors,
};
pub use profile::model::{ImageMetadata, MusicProfile, now_unix_secs};
pub use render::canvas::Canvas;
pub use render::compose::{
    GLOW_COUNT, GLOW_ENERGY_THRESHOLD, Glow, LINE_DANCEABILITY_THRESHOLD, LINE_OPACITY,
    RhythmLine, apply_radial_glow, apply_rhythm_lines, glow_layout, intensity, line_count,
    line_layout, rasterize_base,
};
pub use render::pipeline::{Generator, GeneratorOpts};
pub use render::text::TextAnnotator;
pub use synth::noise_field::{LAYER_OCTAVES, NoiseField};
pub use synth::palette::{BUCKET_THRESHOLDS, Palette};
pub use synth::seed::SeedSet;
