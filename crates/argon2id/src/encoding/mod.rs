//! Canonical encoded hash format
//!
//! Format: `$argon2id$v=<version>$m=<memory>,t=<time>,p=<threads>$<salt>$<digest>`
//! - Delimiter: `$`, giving exactly six sections (the first one empty)
//! - Salt and digest: standard base64 alphabet, no padding

mod decoder;
mod encoder;

pub use decoder::{decode, get_parameters_from_hash};
pub use encoder::generate_from_password;

pub(crate) use decoder::{decode_digest, digest_length, parameters_from_sections};

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::engine::GeneralPurpose;
use base64::Engine;

use crate::digest::Digest;
use crate::error::{HashError, Result};
use crate::kdf::VERSION;
use crate::params::Parameters;

/// Algorithm tag in the second section
pub const ALGORITHM: &str = "argon2id";

const DELIMITER: char = '$';
const SECTION_COUNT: usize = 6;

/// Base64 variant used for salt and digest
pub(crate) const B64: GeneralPurpose = STANDARD_NO_PAD;

/// A canonical encoded hash.
///
/// This is the only artifact that should be persisted. Callers should treat
/// it as opaque and hand it back to [`crate::compare_hash_and_password`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedHash(String);

impl EncodedHash {
    /// Serialize parameters and a digest into the canonical format
    pub(crate) fn from_parts(params: &Parameters, digest: &Digest) -> Self {
        Self(format!(
            "${ALGORITHM}$v={VERSION}$m={},t={},p={}${}${}",
            params.memory,
            params.time,
            params.threads,
            B64.encode(&params.salt),
            B64.encode(digest.as_bytes()),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl std::fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for EncodedHash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<EncodedHash> for String {
    fn from(hash: EncodedHash) -> Self {
        hash.0
    }
}

/// The six sections of an encoded hash, borrowed from the input
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sections<'a> {
    pub algorithm: &'a str,
    pub version: &'a str,
    pub costs: &'a str,
    pub salt: &'a str,
    pub digest: &'a str,
}

impl<'a> Sections<'a> {
    /// Split a candidate record on `$`.
    ///
    /// Fails with `InvalidHash` unless the input is UTF-8, starts with the
    /// delimiter and yields exactly six sections.
    pub fn split(hash: &'a [u8]) -> Result<Self> {
        let hash = std::str::from_utf8(hash).map_err(|_| HashError::InvalidHash)?;

        let parts: Vec<&str> = hash.split(DELIMITER).collect();
        if parts.len() != SECTION_COUNT || !parts[0].is_empty() {
            return Err(HashError::InvalidHash);
        }

        Ok(Self {
            algorithm: parts[1],
            version: parts[2],
            costs: parts[3],
            salt: parts[4],
            digest: parts[5],
        })
    }
}
