//! Input records, sidecar metadata, and the collaborators that produce profiles.

/// Demo and randomly fabricated profiles.
pub mod fabricate;
/// Per-track audio features and uniqueness scoring.
pub mod features;
/// `MusicProfile` and `ImageMetadata`.
pub mod model;
