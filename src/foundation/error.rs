/// Convenience result type used across the crate.
pub type ThumbnailResult<T> = Result<T, ThumbnailError>;

/// Top-level error taxonomy for manifest loading and thumbnail rendering.
///
/// `ImageLoad` and `RenderIncomplete` carry fixed messages: their `Display` output is what
/// batch reports print for a failed entry.
#[derive(thiserror::Error, Debug)]
pub enum ThumbnailError {
    /// Malformed manifest or scene template. Fatal for a batch run.
    #[error("validation error: {0}")]
    Validation(String),

    /// An entry carries keys or values the selected renderer variant does not accept.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required image did not resolve to valid image data.
    #[error("Failed to load image")]
    ImageLoad,

    /// The scene renderer reported a non-success completion status.
    #[error("Render did not complete normally")]
    RenderIncomplete,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbnailError {
    /// Build a [`ThumbnailError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbnailError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
