use crate::foundation::core::RawRgb;
use crate::profile::model::MusicProfile;

/// Upper bounds (exclusive) of the first two color buckets.
pub const BUCKET_THRESHOLDS: [f64; 2] = [0.33, 0.66];

/// The three colors of one image, derived once from the profile.
///
/// Channels are truncated but not clamped, so attributes outside `[0, 1]` may produce
/// out-of-gamut entries; pixels clamp on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [RawRgb; 3],
}

impl Palette {
    /// Map the profile attributes to three colors.
    pub fn from_profile(p: &MusicProfile) -> Self {
        Self {
            colors: [
                RawRgb::from_f64(
                    p.valence * 255.0,
                    p.energy * 200.0,
                    255.0 - p.acousticness * 200.0,
                ),
                RawRgb::from_f64(
                    p.energy * 255.0,
                    p.danceability * 200.0,
                    p.acousticness * 255.0,
                ),
                RawRgb::from_f64(
                    255.0 - p.energy * 100.0,
                    p.valence * 255.0,
                    p.danceability * 200.0,
                ),
            ],
        }
    }

    /// Color bucket for a field value: `< 0.33 -> 0`, `< 0.66 -> 1`, otherwise `2`.
    pub fn bucket(value: f64) -> usize {
        if value < BUCKET_THRESHOLDS[0] {
            0
        } else if value < BUCKET_THRESHOLDS[1] {
            1
        } else {
            2
        }
    }

    /// Color at `index mod 3`.
    pub fn color(&self, index: usize) -> RawRgb {
        self.colors[index % 3]
    }

    /// Color of the bucket `value` falls into.
    pub fn color_for(&self, value: f64) -> RawRgb {
        self.colors[Self::bucket(value)]
    }

    /// All three colors in order.
    pub fn colors(&self) -> &[RawRgb; 3] {
        &self.colors
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/palette.rs"]
mod tests;
