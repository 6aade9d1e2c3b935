use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{TuneprintError, TuneprintResult};
use crate::profile::model::ImageMetadata;
use crate::render::canvas::Canvas;

/// Paths written for one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedImage {
    /// `{dir}/{user_id}.png`
    pub image_path: PathBuf,
    /// `{dir}/{user_id}_metadata.json`
    pub metadata_path: PathBuf,
}

/// Flat-file sink for finished images and their sidecars.
///
/// The directory is created on first write. Failures are returned as-is, never retried.
#[derive(Clone, Debug)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Image path for `user_id`.
    pub fn image_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}.png"))
    }

    /// Sidecar path for `user_id`.
    pub fn metadata_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}_metadata.json"))
    }

    /// Write the PNG and the JSON sidecar for `user_id`.
    #[tracing::instrument(skip(self, canvas, metadata), fields(dir = %self.dir.display()))]
    pub fn save(
        &self,
        user_id: &str,
        canvas: &Canvas,
        metadata: &ImageMetadata,
    ) -> TuneprintResult<SavedImage> {
        validate_user_id(user_id)?;
        ensure_dir(&self.dir)?;

        let image_path = self.image_path(user_id);
        image::save_buffer_with_format(
            &image_path,
            canvas.as_bytes(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", image_path.display()))?;

        let metadata_path = self.metadata_path(user_id);
        let json = serde_json::to_string_pretty(metadata)?;
        std::fs::write(&metadata_path, json)
            .with_context(|| format!("write metadata '{}'", metadata_path.display()))?;

        tracing::info!(image = %image_path.display(), "saved image");
        Ok(SavedImage {
            image_path,
            metadata_path,
        })
    }

    /// Read back the sidecar written for `user_id`.
    pub fn load_metadata(&self, user_id: &str) -> TuneprintResult<ImageMetadata> {
        validate_user_id(user_id)?;
        let path = self.metadata_path(user_id);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read metadata '{}'", path.display()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// User ids become file stems, so they must be non-empty single path components.
pub fn validate_user_id(user_id: &str) -> TuneprintResult<()> {
    if user_id.is_empty() {
        return Err(TuneprintError::validation("user id must be non-empty"));
    }
    if user_id.contains(['/', '\\']) || user_id == "." || user_id == ".." {
        return Err(TuneprintError::validation(format!(
            "user id '{user_id}' must not contain path separators"
        )));
    }
    Ok(())
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> TuneprintResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/output/store.rs"]
mod tests;
