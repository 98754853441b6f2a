//! Password verification against encoded hashes

use tracing::{debug, warn};

use crate::encoding::{
    decode_digest, digest_length, parameters_from_sections, Sections, ALGORITHM,
};
use crate::error::{HashError, Result};
use crate::kdf;
use crate::params::CostSettings;

/// Check a candidate password against an encoded hash.
///
/// Validation stops at the first failure:
/// 1. the record must have exactly six `$`-delimited sections
/// 2. the algorithm tag must be `argon2id`
/// 3. the stored digest must be valid base64
/// 4. the version, cost and salt sections must parse
/// 5. the digest is re-derived from `password`
/// 6. stored and derived digests are compared in constant time
///
/// The digest is re-derived at the stored digest's length, so records whose
/// salt and digest lengths differ verify as well.
///
/// # Errors
/// * `InvalidHash` / `Base64` / `UnsupportedVersion` - the record is malformed
/// * `InvalidVersion` - the record is not an Argon2id hash
/// * `DerivationFailure` - the stored costs cannot be derived with
/// * `PasswordMismatch` - the password is wrong
pub fn compare_hash_and_password(hash: &[u8], password: &[u8]) -> Result<()> {
    let sections = Sections::split(hash)?;

    if sections.algorithm != ALGORITHM {
        warn!("Rejected encoded hash with non-argon2id algorithm tag");
        return Err(HashError::InvalidVersion);
    }

    let stored = decode_digest(&sections)?;

    let mut params = parameters_from_sections(&sections)?;
    params.length = digest_length(&stored)?;

    let candidate = kdf::derive(password, &params)?;

    if !stored.matches(&candidate) {
        debug!("Password did not match encoded hash");
        return Err(HashError::PasswordMismatch);
    }

    Ok(())
}

/// Check whether an encoded hash was made with a different cost profile.
///
/// Meant to be called after a successful verification, while the plaintext
/// password is still at hand, to upgrade stored hashes in place.
///
/// # Errors
/// Same structural errors as [`compare_hash_and_password`]
pub fn needs_rehash(hash: &[u8], target: &CostSettings) -> Result<bool> {
    let sections = Sections::split(hash)?;

    if sections.algorithm != ALGORITHM {
        return Err(HashError::InvalidVersion);
    }

    let digest_len = decode_digest(&sections)?.len();
    let params = parameters_from_sections(&sections)?;

    Ok(params.time != target.time
        || params.memory != target.memory
        || params.threads != target.threads
        || digest_len != target.length as usize
        || params.salt.len() < target.length as usize)
}
