//! Error types for argon2id

use thiserror::Error;

/// Result type alias for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

/// Hashing and verification error types
#[derive(Error, Debug)]
pub enum HashError {
    /// The record does not split into the six `$`-delimited sections, or a
    /// section does not follow the fixed grammar.
    #[error("argon2id: invalid hash provided")]
    InvalidHash,

    /// The record may be an Argon2 hash, but not an Argon2id one.
    #[error("argon2id: non argon2id hash provided")]
    InvalidVersion,

    #[error("argon2id: unsupported algorithm version {0}")]
    UnsupportedVersion(u32),

    #[error("argon2id: password did not match")]
    PasswordMismatch,

    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailure(String),

    #[error("Invalid base64 in hash: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl HashError {
    /// True when a well-formed record was checked and the password was wrong.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, HashError::PasswordMismatch)
    }

    /// True when the record itself is corrupt or foreign, as opposed to the
    /// password being wrong.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            HashError::InvalidHash
                | HashError::InvalidVersion
                | HashError::UnsupportedVersion(_)
                | HashError::Base64(_)
        )
    }
}
