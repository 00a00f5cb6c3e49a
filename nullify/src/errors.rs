use thiserror::Error;

/// Top-level error type returned while configuring a null filter.
///
/// Filtering itself never fails; every variant here is raised at configuration time.
#[derive(Debug, Error)]
pub enum NullifyError {
    /// The requested type did not resolve to a mask in `0..=63`.
    #[error("unknown type value \"{value}\" ({kind})")]
    InvalidType { value: String, kind: &'static str },

    /// An options mapping carried a key with no matching setter.
    #[error("the option \"{option}\" does not have a matching setter")]
    UnknownOption { option: String },

    /// Options text was not valid JSON, or did not have the expected shape.
    #[error("invalid options json: {0}")]
    Json(#[from] serde_json::Error),

    /// Options text was not valid TOML, or did not have the expected shape.
    #[error("invalid options toml: {0}")]
    Toml(#[from] toml::de::Error),
}

impl NullifyError {
    pub fn invalid_type(value: impl Into<String>, kind: &'static str) -> Self {
        Self::InvalidType {
            value: value.into(),
            kind,
        }
    }
}

/// Convenience alias for results produced by this crate.
pub type NullifyResult<T> = Result<T, NullifyError>;
