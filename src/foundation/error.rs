/// Convenience result type used across the clock face core.
pub type ClockResult<T> = Result<T, ClockError>;

/// Failure taxonomy for glyph resolution, loading and transitions.
///
/// Only [`ClockError::InvalidInput`] and [`ClockError::Config`] are surfaced to
/// callers of the face API. Load and animation failures are absorbed by the
/// slot that hit them and never leak into other slots.
#[derive(thiserror::Error, Debug)]
pub enum ClockError {
    /// A time/date field or slot argument outside its documented range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A glyph image was missing or could not be decoded.
    #[error("resource load failure: {0}")]
    ResourceLoad(String),

    /// The host could not allocate a geometric animation.
    #[error("animation unavailable: {0}")]
    AnimationUnavailable(String),

    /// Malformed or inconsistent face configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClockError {
    /// Build a [`ClockError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`ClockError::ResourceLoad`] value.
    pub fn resource_load(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    /// Build a [`ClockError::AnimationUnavailable`] value.
    pub fn animation_unavailable(msg: impl Into<String>) -> Self {
        Self::AnimationUnavailable(msg.into())
    }

    /// Build a [`ClockError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
