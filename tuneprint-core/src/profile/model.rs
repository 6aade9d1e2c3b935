use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Local, Utc};

use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::foundation::json::serialize_compact;

pub(crate) const DEFAULT_ENERGY: f64 = 0.5;
pub(crate) const DEFAULT_VALENCE: f64 = 0.5;
pub(crate) const DEFAULT_DANCEABILITY: f64 = 0.5;
pub(crate) const DEFAULT_ACOUSTICNESS: f64 = 0.3;
pub(crate) const DEFAULT_UNIQUE_SCORE: f64 = 50.0;

/// Musical attributes that drive one image.
///
/// Attribute values are nominally in `[0, 1]` (`unique_score` in `[0, 100]`) but are neither
/// clamped nor validated; the compositor clamps final pixel channels instead. Fields missing from
/// JSON input fall back to the documented defaults, `timestamp` to the current time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MusicProfile {
    /// Perceived intensity.
    #[serde(default = "default_energy", serialize_with = "serialize_compact")]
    pub energy: f64,
    /// Musical positiveness.
    #[serde(default = "default_valence", serialize_with = "serialize_compact")]
    pub valence: f64,
    /// Suitability for dancing.
    #[serde(default = "default_danceability", serialize_with = "serialize_compact")]
    pub danceability: f64,
    /// Acoustic confidence.
    #[serde(default = "default_acousticness", serialize_with = "serialize_compact")]
    pub acousticness: f64,
    /// Externally computed distinctiveness score.
    #[serde(
        rename = "uniqueScore",
        alias = "unique_score",
        default = "default_unique_score",
        serialize_with = "serialize_compact"
    )]
    pub unique_score: f64,
    /// Seconds since the Unix epoch.
    #[serde(default = "now_unix_secs", serialize_with = "serialize_compact")]
    pub timestamp: f64,
}

fn default_energy() -> f64 {
    DEFAULT_ENERGY
}

fn default_valence() -> f64 {
    DEFAULT_VALENCE
}

fn default_danceability() -> f64 {
    DEFAULT_DANCEABILITY
}

fn default_acousticness() -> f64 {
    DEFAULT_ACOUSTICNESS
}

fn default_unique_score() -> f64 {
    DEFAULT_UNIQUE_SCORE
}

/// Current wall-clock time as fractional Unix seconds (microsecond resolution).
pub fn now_unix_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

impl MusicProfile {
    /// Default attributes stamped with `timestamp`.
    pub fn at(timestamp: f64) -> Self {
        Self {
            energy: DEFAULT_ENERGY,
            valence: DEFAULT_VALENCE,
            danceability: DEFAULT_DANCEABILITY,
            acousticness: DEFAULT_ACOUSTICNESS,
            unique_score: DEFAULT_UNIQUE_SCORE,
            timestamp,
        }
    }

    /// Default attributes stamped with the current time.
    pub fn now() -> Self {
        Self::at(now_unix_secs())
    }

    /// Parse a profile from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TuneprintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TuneprintError::serde(format!("parse music profile JSON: {e}")))
    }

    /// Parse a profile from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TuneprintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TuneprintError::validation(format!("open profile JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Annotation timestamp in the local timezone, when representable.
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        let secs = self.timestamp.floor();
        let nanos = ((self.timestamp - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
            .map(|utc| utc.with_timezone(&Local))
    }
}

/// Sidecar record written next to every generated image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageMetadata {
    /// Owner of the image; also the output file stem.
    pub user_id: String,
    /// Profile timestamp (Unix seconds).
    #[serde(serialize_with = "serialize_compact")]
    pub timestamp: f64,
    /// Profile uniqueness score.
    #[serde(serialize_with = "serialize_compact")]
    pub unique_score: f64,
    /// Profile energy.
    #[serde(serialize_with = "serialize_compact")]
    pub energy: f64,
    /// Profile valence.
    #[serde(serialize_with = "serialize_compact")]
    pub valence: f64,
    /// Profile danceability.
    #[serde(serialize_with = "serialize_compact")]
    pub danceability: f64,
    /// Profile acousticness.
    #[serde(serialize_with = "serialize_compact")]
    pub acousticness: f64,
    /// Local generation time, ISO-8601.
    pub generated_at: DateTime<Local>,
}

impl ImageMetadata {
    /// Record `profile` for `user_id`, stamped with `generated_at`.
    pub fn new(user_id: impl Into<String>, profile: &MusicProfile, generated_at: DateTime<Local>) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp: profile.timestamp,
            unique_score: profile.unique_score,
            energy: profile.energy,
            valence: profile.valence,
            danceability: profile.danceability,
            acousticness: profile.acousticness,
            generated_at,
        }
    }

    /// The profile this record was written for.
    pub fn profile(&self) -> MusicProfile {
        MusicProfile {
            energy: self.energy,
            valence: self.valence,
            danceability: self.danceability,
            acousticness: self.acousticness,
            unique_score: self.unique_score,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/model.rs"]
mod tests;
