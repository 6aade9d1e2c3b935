//! Batch drivers on top of [`Generator`] and [`OutputStore`]: the trigger-file handoff and the
//! demo run.

use std::path::PathBuf;

use chrono::Local;
use rand::Rng;

use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::profile::fabricate::{current_user_id, default_user_id, demo_profiles, random_profile};
use crate::profile::model::{ImageMetadata, MusicProfile, now_unix_secs};
use crate::output::store::{OutputStore, SavedImage};
use crate::render::pipeline::Generator;

/// File name another process drops to request a single image.
pub const DEFAULT_TRIGGER_FILE: &str = "temp_music_data.json";

/// Batch configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOpts {
    /// Trigger file polled by [`process_trigger_file`].
    pub trigger_path: PathBuf,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            trigger_path: PathBuf::from(DEFAULT_TRIGGER_FILE),
        }
    }
}

/// Contents of a trigger file.
///
/// ```json
/// { "user_id": "abc", "music_data": { "energy": 0.7, "uniqueScore": 64 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerRequest {
    /// Output id; `user_{unix_secs}` when absent.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Profile to render; missing fields take their defaults.
    #[serde(default = "MusicProfile::now")]
    pub music_data: MusicProfile,
}

/// Outcome of [`run_demo_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Images written, in batch order.
    pub saved: Vec<SavedImage>,
    /// Profiles that failed to render or save.
    pub failed: usize,
}

/// Render `profile` and persist it under `user_id`, stamping the metadata with the current time.
pub fn generate_and_save(
    generator: &Generator,
    store: &OutputStore,
    user_id: &str,
    profile: &MusicProfile,
) -> TuneprintResult<SavedImage> {
    let canvas = generator.generate(profile)?;
    let metadata = ImageMetadata::new(user_id, profile, Local::now());
    store.save(user_id, &canvas, &metadata)
}

/// Consume the trigger file at `opts.trigger_path` if one exists.
///
/// Returns `Ok(None)` when the file is absent. It is removed only after the image has been
/// saved; on any error it is left in place for the next attempt.
#[tracing::instrument(skip_all, fields(path = %opts.trigger_path.display()))]
pub fn process_trigger_file(
    opts: &BatchOpts,
    generator: &Generator,
    store: &OutputStore,
) -> TuneprintResult<Option<SavedImage>> {
    let path = opts.trigger_path.as_path();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no trigger file");
            return Ok(None);
        }
        Err(e) => {
            return Err(TuneprintError::Other(anyhow::Error::new(e).context(format!(
                "read trigger file '{}'",
                path.display()
            ))));
        }
    };

    let request: TriggerRequest = serde_json::from_slice(&bytes)?;
    let user_id = match request.user_id {
        Some(id) => id,
        None => default_user_id(now_unix_secs().floor() as i64),
    };

    let saved = generate_and_save(generator, store, &user_id, &request.music_data)?;
    std::fs::remove_file(path).map_err(|e| {
        TuneprintError::Other(
            anyhow::Error::new(e).context(format!("remove trigger file '{}'", path.display())),
        )
    })?;
    tracing::info!(user_id = %user_id, "processed trigger file");
    Ok(Some(saved))
}

/// Render the four demo profiles plus one random "current user" profile.
///
/// A failing profile is logged and counted; the rest of the batch still runs.
#[tracing::instrument(skip(generator, store, rng))]
pub fn run_demo_batch<R: Rng + ?Sized>(
    generator: &Generator,
    store: &OutputStore,
    rng: &mut R,
    timestamp: f64,
) -> BatchReport {
    let mut jobs: Vec<(String, MusicProfile)> = demo_profiles(timestamp)
        .into_iter()
        .map(|d| {
            tracing::debug!(name = d.name, user_id = %d.user_id, "queued demo profile");
            (d.user_id, d.profile)
        })
        .collect();
    jobs.push((
        current_user_id(timestamp.floor() as i64),
        random_profile(rng, timestamp),
    ));

    let mut report = BatchReport::default();
    for (user_id, profile) in &jobs {
        match generate_and_save(generator, store, user_id, profile) {
            Ok(saved) => report.saved.push(saved),
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "profile failed");
                report.failed += 1;
            }
        }
    }
    tracing::info!(saved = report.saved.len(), failed = report.failed, "demo batch done");
    report
}

#[cfg(test)]
#[path = "../../tests/unit/output/batch.rs"]
mod tests;
