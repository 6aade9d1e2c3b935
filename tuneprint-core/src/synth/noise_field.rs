use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::synth::seed::SeedSet;

/// Octave counts of the three layers, coarse to fine.
pub const LAYER_OCTAVES: [usize; 3] = [3, 6, 12];

/// `(amplitude, frequency)` of each layer in the turbulence sum.
const LAYER_BANDS: [(f64, f64); 3] = [(1.0, 1.0), (0.5, 2.0), (0.25, 4.0)];

/// Scalar field over the unit square built from three seeded fBm Perlin generators.
///
/// Immutable after construction; `sample` is a pure function of its inputs.
pub struct NoiseField {
    layers: [Fbm<Perlin>; 3],
}

impl NoiseField {
    /// Build the field for `seeds`.
    pub fn new(seeds: &SeedSet) -> Self {
        let layer = |i: usize| Fbm::<Perlin>::new(seeds.generators[i]).set_octaves(LAYER_OCTAVES[i]);
        Self {
            layers: [layer(0), layer(1), layer(2)],
        }
    }

    /// Raw weighted sum of the three layers at `(x, y)`, roughly in `[-1.75, 1.75]`.
    pub fn sample_raw(&self, x: f64, y: f64) -> f64 {
        self.layers
            .iter()
            .zip(LAYER_BANDS)
            .map(|(layer, (amp, freq))| amp * layer.get([x * freq, y * freq]))
            .sum()
    }

    /// Field value at normalized `(x, y)`, rescaled by `(v + 1) / 2`.
    ///
    /// Lands mostly in `[0, 1]` but is not bounded; consumers clamp.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        (self.sample_raw(x, y) + 1.0) / 2.0
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("octaves", &LAYER_OCTAVES)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/noise_field.rs"]
mod tests;
