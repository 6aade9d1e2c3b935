//! Deterministic inputs of the compositor: seeds, the noise field, and the palette.

/// Three-layer fBm noise field.
pub mod noise_field;
/// Attribute-driven colors.
pub mod palette;
/// Seed derivation from a profile.
pub mod seed;
