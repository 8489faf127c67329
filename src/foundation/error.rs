/// Convenience result type used across the crate.
pub type NotchResult<T> = Result<T, NotchError>;

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum NotchError {
    /// Endpoint outlines or settings that cannot drive an animation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Host-provided surface cannot be drawn into.
    #[error("render surface error: {0}")]
    RenderSurface(String),

    /// Errors when parsing configuration files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NotchError {
    /// Build a [`NotchError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`NotchError::RenderSurface`] value.
    pub fn render_surface(msg: impl Into<String>) -> Self {
        Self::RenderSurface(msg.into())
    }

    /// Build a [`NotchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
