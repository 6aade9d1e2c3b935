//! Profiles that do not come from a listener: the named demo set and the random "current user".
//!
//! This is the only place in the crate that draws unseeded randomness; callers pass the RNG in so
//! tests can pin it.

use rand::Rng;

use crate::profile::model::MusicProfile;

/// A named profile from the demo batch.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoProfile {
    /// Human-readable label.
    pub name: &'static str,
    /// Output user id (`demo_user_{n}`).
    pub user_id: String,
    /// Attributes to render.
    pub profile: MusicProfile,
}

const DEMO_SET: [(&str, f64, f64, f64, f64); 4] = [
    ("Energetic", 0.9, 0.8, 0.85, 0.1),
    ("Calm", 0.2, 0.6, 0.3, 0.8),
    ("Happy", 0.6, 0.9, 0.7, 0.4),
    ("Sad", 0.4, 0.2, 0.4, 0.6),
];

/// The four demo profiles, numbered from `demo_user_1`, all stamped with `timestamp`.
pub fn demo_profiles(timestamp: f64) -> Vec<DemoProfile> {
    DEMO_SET
        .iter()
        .enumerate()
        .map(
            |(i, &(name, energy, valence, danceability, acousticness))| DemoProfile {
                name,
                user_id: format!("demo_user_{}", i + 1),
                profile: MusicProfile {
                    energy,
                    valence,
                    danceability,
                    acousticness,
                    ..MusicProfile::at(timestamp)
                },
            },
        )
        .collect()
}

/// A plausible random listener; the uniqueness score keeps its default.
pub fn random_profile<R: Rng + ?Sized>(rng: &mut R, timestamp: f64) -> MusicProfile {
    MusicProfile {
        energy: rng.gen_range(0.3..0.9),
        valence: rng.gen_range(0.2..0.95),
        danceability: rng.gen_range(0.4..0.85),
        acousticness: rng.gen_range(0.1..0.8),
        ..MusicProfile::at(timestamp)
    }
}

/// Fallback id for input records that carry none.
pub fn default_user_id(unix_secs: i64) -> String {
    format!("user_{unix_secs}")
}

/// Id of the randomly fabricated profile in the demo batch.
pub fn current_user_id(unix_secs: i64) -> String {
    format!("current_user_{unix_secs}")
}

#[cfg(test)]
#[path = "../../tests/unit/profile/fabricate.rs"]
mod tests;
