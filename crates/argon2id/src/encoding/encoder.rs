//! Hashing a password into the canonical format

use tracing::debug;

use super::EncodedHash;
use crate::error::Result;
use crate::kdf;
use crate::params::Parameters;

/// Hash a password with Argon2id and encode the result.
///
/// The same password and parameters always produce the same output, so a
/// fresh salt (see [`Parameters::new`]) is needed for every stored hash.
///
/// # Arguments
/// * `password` - Raw password bytes
/// * `params` - Costs and salt to hash with
///
/// # Returns
/// The encoded hash, e.g. `$argon2id$v=19$m=65536,t=3,p=4$<salt>$<digest>`
///
/// # Errors
/// * `DerivationFailure` - Argon2id rejected the parameters
pub fn generate_from_password(password: &[u8], params: &Parameters) -> Result<EncodedHash> {
    let digest = kdf::derive(password, params)?;
    let encoded = EncodedHash::from_parts(params, &digest);

    debug!(length = encoded.as_str().len(), "Encoded Argon2id hash");
    Ok(encoded)
}
