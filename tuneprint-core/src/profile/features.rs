//! Aggregation of per-track audio features into a [`MusicProfile`].

use crate::foundation::math::floor_i64;
use crate::profile::model::{
    DEFAULT_ACOUSTICNESS, DEFAULT_DANCEABILITY, DEFAULT_ENERGY, DEFAULT_VALENCE, MusicProfile,
};

const DEFAULT_TEMPO: f64 = 120.0;

/// Audio analysis of a single track.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioFeatures {
    /// Perceived intensity in `[0, 1]`.
    pub energy: f64,
    /// Musical positiveness in `[0, 1]`.
    pub valence: f64,
    /// Suitability for dancing in `[0, 1]`.
    pub danceability: f64,
    /// Acoustic confidence in `[0, 1]`.
    pub acousticness: f64,
    /// Beats per minute.
    pub tempo: f64,
}

/// Averaged features of a listening history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureAverages {
    /// Mean energy.
    pub energy: f64,
    /// Mean valence.
    pub valence: f64,
    /// Mean danceability.
    pub danceability: f64,
    /// Mean acousticness.
    pub acousticness: f64,
    /// Mean tempo.
    pub tempo: f64,
}

impl FeatureAverages {
    /// Average `features`; an empty slice yields the profile defaults and a 120 BPM tempo.
    pub fn of(features: &[AudioFeatures]) -> Self {
        if features.is_empty() {
            return Self {
                energy: DEFAULT_ENERGY,
                valence: DEFAULT_VALENCE,
                danceability: DEFAULT_DANCEABILITY,
                acousticness: DEFAULT_ACOUSTICNESS,
                tempo: DEFAULT_TEMPO,
            };
        }

        let n = features.len() as f64;
        let mean = |f: fn(&AudioFeatures) -> f64| features.iter().map(f).sum::<f64>() / n;
        Self {
            energy: mean(|t: &AudioFeatures| t.energy),
            valence: mean(|t: &AudioFeatures| t.valence),
            danceability: mean(|t: &AudioFeatures| t.danceability),
            acousticness: mean(|t: &AudioFeatures| t.acousticness),
            tempo: mean(|t: &AudioFeatures| t.tempo),
        }
    }
}

/// Weighted contributions to the uniqueness score, in a fixed order.
///
/// Each input is scaled by a distinct prime-like weight so that profiles sharing most features
/// still spread apart; the user id and the millisecond clock contribute the session component.
pub fn uniqueness_factors(avg: &FeatureAverages, user_id: &str, timestamp_secs: f64) -> [f64; 7] {
    let id_code = user_id.encode_utf16().next().map_or(0, |unit| unit % 100);
    let timestamp_ms = timestamp_secs * 1000.0;
    [
        avg.energy * 17.31,
        avg.valence * 19.47,
        avg.danceability * 23.89,
        avg.acousticness * 29.71,
        (avg.tempo / 200.0) * 31.37,
        f64::from(id_code) / 100.0 * 37.43,
        timestamp_ms.rem_euclid(10_000.0) / 10_000.0 * 41.59,
    ]
}

/// Fold the factors into a score in `[0, 100)`.
pub fn unique_score(factors: &[f64]) -> f64 {
    let folded = factors.iter().fold(0.0, |acc, f| (acc + f) % 100.0);
    floor_i64(folded) as f64
}

/// Build the profile for a listening history.
#[tracing::instrument(skip(features), fields(tracks = features.len()))]
pub fn aggregate_profile(features: &[AudioFeatures], user_id: &str, timestamp_secs: f64) -> MusicProfile {
    let avg = FeatureAverages::of(features);
    let score = unique_score(&uniqueness_factors(&avg, user_id, timestamp_secs));
    tracing::debug!(score, "computed uniqueness score");

    MusicProfile {
        energy: avg.energy,
        valence: avg.valence,
        danceability: avg.danceability,
        acousticness: avg.acousticness,
        unique_score: score,
        timestamp: timestamp_secs,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/features.rs"]
mod tests;
