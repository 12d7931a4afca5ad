//! Error types for soundex-core.
//!
//! Encoding itself never fails; these cover parsing codes and policies and
//! calling the named functions with bad arguments.

use thiserror::Error;

/// Soundex error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundexError {
    #[error("Invalid soundex code: {0}")]
    InvalidCode(String),

    #[error("Invalid seed policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result type for soundex operations
pub type SoundexResult<T> = Result<T, SoundexError>;

impl serde::Serialize for SoundexError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
