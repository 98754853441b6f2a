//! Password hasher bound to a cost profile

use tracing::info;

use crate::encoding::{generate_from_password, EncodedHash};
use crate::error::Result;
use crate::params::{CostSettings, Parameters};
use crate::settings::Settings;
use crate::verify::{compare_hash_and_password, needs_rehash};

/// Hashes passwords with a fixed cost profile and a fresh salt per hash.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    costs: CostSettings,
}

impl PasswordHasher {
    pub fn new(costs: CostSettings) -> Self {
        Self { costs }
    }

    /// Create a hasher using the profile stored in the settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.costs)
    }

    pub fn costs(&self) -> &CostSettings {
        &self.costs
    }

    /// Hash a password with a newly generated salt
    ///
    /// # Errors
    /// * `RandomnessUnavailable` - no salt could be generated
    /// * `DerivationFailure` - Argon2id rejected the cost profile
    pub fn hash(&self, password: &[u8]) -> Result<EncodedHash> {
        let params = Parameters::generate(&self.costs)?;
        generate_from_password(password, &params)
    }

    /// Verify a password against a stored hash
    ///
    /// The stored hash's own parameters are used, not this hasher's profile.
    pub fn verify(&self, hash: &[u8], password: &[u8]) -> Result<()> {
        compare_hash_and_password(hash, password)
    }

    /// Check whether a stored hash should be replaced with one made under
    /// this hasher's profile
    pub fn needs_rehash(&self, hash: &[u8]) -> Result<bool> {
        needs_rehash(hash, &self.costs)
    }

    /// Verify a password and, when the stored hash uses an outdated profile,
    /// return a replacement hash made with this hasher's profile.
    pub fn verify_and_upgrade(&self, hash: &[u8], password: &[u8]) -> Result<Option<EncodedHash>> {
        self.verify(hash, password)?;

        if !self.needs_rehash(hash)? {
            return Ok(None);
        }

        info!("Upgrading stored hash to current cost profile");
        self.hash(password).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashError;

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(CostSettings {
            time: 1,
            memory: 1024,
            threads: 1,
            length: 16,
        })
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let password = b"my_secure_password";

        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(hash.as_bytes(), password).is_ok());
        assert!(matches!(
            hasher.verify(hash.as_bytes(), b"wrong_password"),
            Err(HashError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = test_hasher();
        let hash1 = hasher.hash(b"password").unwrap();
        let hash2 = hasher.hash(b"password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_fresh_hash_does_not_need_rehash() {
        let hasher = test_hasher();
        let hash = hasher.hash(b"password").unwrap();
        assert!(!hasher.needs_rehash(hash.as_bytes()).unwrap());
    }

    #[test]
    fn test_verify_and_upgrade() {
        let old = test_hasher();
        let hash = old.hash(b"password").unwrap();

        assert!(old.verify_and_upgrade(hash.as_bytes(), b"password").unwrap().is_none());

        let new = PasswordHasher::new(CostSettings {
            time: 2,
            memory: 2048,
            threads: 1,
            length: 16,
        });
        let upgraded = new
            .verify_and_upgrade(hash.as_bytes(), b"password")
            .unwrap()
            .expect("hash should be upgraded");

        assert!(upgraded.as_str().contains("m=2048,t=2,p=1"));
        assert!(new.verify(upgraded.as_bytes(), b"password").is_ok());
        assert!(!new.needs_rehash(upgraded.as_bytes()).unwrap());
    }

    #[test]
    fn test_upgrade_requires_correct_password() {
        let hash = test_hasher().hash(b"password").unwrap();
        let new = PasswordHasher::new(CostSettings {
            time: 2,
            ..*test_hasher().costs()
        });

        let result = new.verify_and_upgrade(hash.as_bytes(), b"not the password");
        assert!(matches!(result, Err(HashError::PasswordMismatch)));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::new();
        let hasher = PasswordHasher::from_settings(&settings);
        assert_eq!(hasher.costs(), &CostSettings::default());
    }
}
