/// Convenience result type used across tuneprint.
pub type TuneprintResult<T> = Result<T, TuneprintError>;

/// Top-level error taxonomy used by generator and persistence APIs.
#[derive(thiserror::Error, Debug)]
pub enum TuneprintError {
    /// Invalid caller-provided data (empty user id, zero-sized canvas, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while composing pixels (text layer setup, pixmap allocation).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing profile and metadata records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TuneprintError {
    /// Build a [`TuneprintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TuneprintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TuneprintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TuneprintError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
