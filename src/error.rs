use thiserror::Error;

/// Errors produced by substitution operations.
#[derive(Error, Debug)]
pub enum SubstError {
    /// The pattern string failed to compile as a regular expression.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A strict-mode template referenced a group the pattern does not declare.
    #[error("replacement references group {index}, but the pattern captures {available} group(s)")]
    GroupOutOfRange { index: usize, available: usize },

    /// A replacement callback failed; aborts the remaining scan.
    #[error("replacement callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SubstError {
    /// Wrap an arbitrary error raised inside a replacement callback.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SubstError::Callback(err.into())
    }
}
