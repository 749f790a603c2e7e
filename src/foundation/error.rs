/// Convenience result type used across starflag.
pub type FlagResult<T> = Result<T, FlagError>;

/// Top-level error taxonomy used by layout and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlagError {
    /// Weights that cannot be normalized (non-positive total, negative or non-finite entries).
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Caller-supplied options that do not describe a renderable flag.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A region required by the ordering is absent from the weight table.
    #[error("missing region: {0}")]
    MissingRegion(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlagError {
    /// Build a [`FlagError::InvalidWeights`] value.
    pub fn invalid_weights(msg: impl Into<String>) -> Self {
        Self::InvalidWeights(msg.into())
    }

    /// Build a [`FlagError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`FlagError::MissingRegion`] value.
    pub fn missing_region(region: impl Into<String>) -> Self {
        Self::MissingRegion(region.into())
    }

    /// Build a [`FlagError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
