//! Argon2id key derivation
//!
//! The memory-hard computation itself comes from the `argon2` crate; this
//! module only pins the algorithm and version and maps its errors.

use argon2::{Algorithm, Argon2, Params, Version};
use tracing::debug;

use crate::digest::Digest;
use crate::error::{HashError, Result};
use crate::params::Parameters;

/// Argon2 algorithm version written into every encoded hash (0x13)
pub const VERSION: u32 = 19;

/// Derive a digest of `params.length` bytes from a password
///
/// # Arguments
/// * `password` - Raw password bytes, no character set assumed
/// * `params` - Costs and salt to derive with
///
/// # Errors
/// * `DerivationFailure` - the costs, salt or output length are outside
///   what Argon2id accepts (for example a salt shorter than 8 bytes)
pub fn derive(password: &[u8], params: &Parameters) -> Result<Digest> {
    let argon2_params = Params::new(
        params.memory,
        params.time,
        u32::from(params.threads),
        Some(params.length as usize),
    )
    .map_err(|e| HashError::DerivationFailure(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    debug!(
        time = params.time,
        memory = params.memory,
        threads = params.threads,
        length = params.length,
        "Deriving Argon2id digest"
    );

    let mut out = vec![0u8; params.length as usize];
    argon2
        .hash_password_into(password, &params.salt, &mut out)
        .map_err(|e| HashError::DerivationFailure(e.to_string()))?;

    Ok(Digest::new(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params(salt: &[u8]) -> Parameters {
        Parameters {
            time: 1,
            memory: 1024,
            threads: 1,
            length: 8,
            salt: salt.to_vec(),
        }
    }

    #[test]
    fn test_version_matches_argon2_crate() {
        assert_eq!(VERSION, Version::V0x13 as u32);
    }

    #[test]
    fn test_known_digest() {
        let digest = derive(b"argon", &test_params(b"SALTSALT")).unwrap();
        assert_eq!(
            digest.as_bytes(),
            &[0xcf, 0xf5, 0xfd, 0x53, 0x36, 0x96, 0x0a, 0xc2]
        );
    }

    #[test]
    fn test_derive_deterministic() {
        let params = test_params(b"0123456789abcdef");
        let digest1 = derive(b"password", &params).unwrap();
        let digest2 = derive(b"password", &params).unwrap();
        assert_eq!(digest1, digest2);
    }

    #[test]
    fn test_derive_different_passwords() {
        let params = test_params(b"0123456789abcdef");
        let digest1 = derive(b"password1", &params).unwrap();
        let digest2 = derive(b"password2", &params).unwrap();
        assert_ne!(digest1, digest2);
    }

    #[test]
    fn test_output_length_follows_params() {
        let mut params = test_params(b"0123456789abcdef");
        params.length = 48;
        let digest = derive(b"password", &params).unwrap();
        assert_eq!(digest.len(), 48);
    }

    #[test]
    fn test_short_salt_fails() {
        let result = derive(b"argon", &test_params(b"SALT"));
        assert!(matches!(result, Err(HashError::DerivationFailure(_))));
    }

    #[test]
    fn test_zero_costs_fail() {
        let mut params = test_params(b"0123456789abcdef");
        params.time = 0;
        assert!(matches!(
            derive(b"password", &params),
            Err(HashError::DerivationFailure(_))
        ));

        let mut params = test_params(b"0123456789abcdef");
        params.threads = 0;
        assert!(matches!(
            derive(b"password", &params),
            Err(HashError::DerivationFailure(_))
        ));
    }
}
