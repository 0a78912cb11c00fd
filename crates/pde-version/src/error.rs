//! Error types for pde-version

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A version string does not follow `major[.minor[.micro[.qualifier]]]`.
    #[error("malformed version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    /// A version range is syntactically invalid or has crossed bounds.
    #[error("invalid version range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    /// A match rule name or code is not recognised.
    #[error("unknown match rule: {0}")]
    UnknownMatchRule(String),
}

impl Error {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Error::MalformedVersion {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_range(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
