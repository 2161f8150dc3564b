/// Convenience result type used across Driftline.
pub type DriftlineResult<T> = Result<T, DriftlineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Degenerate geometry is deliberately absent here: the resampler and the
/// letter layout guard it and produce a degenerate-but-valid frame instead
/// of failing (the worst case is a straight line, never a crash).
#[derive(thiserror::Error, Debug)]
pub enum DriftlineError {
    /// Invalid user-provided scene or tuning data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while advancing or sampling animation state.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftlineError {
    /// Build a [`DriftlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DriftlineError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`DriftlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
