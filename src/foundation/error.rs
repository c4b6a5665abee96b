/// Convenience result type used across filigree.
pub type FiligreeResult<T> = Result<T, FiligreeError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum FiligreeError {
    /// Out-of-range or malformed parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Motif assets that could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Failures while rasterizing or exporting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing parameter or grid files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FiligreeError {
    /// Build a [`FiligreeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FiligreeError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FiligreeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FiligreeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
