use crate::foundation::math::floor_i64;
use crate::profile::model::MusicProfile;

const TIMESTAMP_MODULUS: i64 = 10_000_000_000;
const GENERATOR_MODULUS: i64 = 1_000_000_000;

/// Deterministic seeds for one image.
///
/// `base` drives the overlay placement and line parity; `generators` seed the three noise
/// layers and are always in `[0, 10^9)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedSet {
    /// Timestamp-derived value perturbed by every attribute.
    pub base: i64,
    /// Seeds for the 3-, 6- and 12-octave generators.
    pub generators: [u32; 3],
}

impl SeedSet {
    /// Derive the seeds for `profile`.
    ///
    /// Attribute weights are spread (10k, 20k, 30k, 40k, 500 per score point) so profiles with
    /// identical timestamps still land on distinct bases.
    pub fn derive(profile: &MusicProfile) -> Self {
        let micros = floor_i64(profile.timestamp * 1_000_000.0).rem_euclid(TIMESTAMP_MODULUS);
        let base = micros
            .wrapping_add(floor_i64(profile.energy * 10_000.0))
            .wrapping_add(floor_i64(profile.valence * 20_000.0))
            .wrapping_add(floor_i64(profile.danceability * 30_000.0))
            .wrapping_add(floor_i64(profile.acousticness * 40_000.0))
            .wrapping_add(floor_i64(profile.unique_score * 500.0));
        Self::from_base(base)
    }

    /// Seeds for an explicit base value.
    pub fn from_base(base: i64) -> Self {
        let gen_seed = |k: i64| base.wrapping_add(k).rem_euclid(GENERATOR_MODULUS) as u32;
        Self {
            base,
            generators: [gen_seed(0), gen_seed(1), gen_seed(2)],
        }
    }

    /// `(base + offset) mod m`, always non-negative.
    pub fn cycle(&self, offset: i64, m: i64) -> i64 {
        self.base.wrapping_add(offset).rem_euclid(m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/seed.rs"]
mod tests;
