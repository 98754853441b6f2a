//! Cost parameters and salt generation

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HashError, Result};

/// Cost settings for Argon2id, without a salt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSettings {
    /// Time cost / iterations (default: 3)
    pub time: u32,
    /// Memory cost in KiB (default: 65536 = 64MB)
    pub memory: u32,
    /// Parallelism (default: 4)
    pub threads: u8,
    /// Digest length in bytes, also used as the salt length (default: 32)
    pub length: u32,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            time: 3,
            memory: 65536, // 64 MB
            threads: 4,
            length: 32,
        }
    }
}

/// The full set of inputs that control the output of a hash.
///
/// A fresh value with a new salt is created for every hashing event. On
/// verification a value is rebuilt from the encoded hash and dropped after
/// the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub time: u32,
    pub memory: u32,
    pub threads: u8,
    pub length: u32,
    pub salt: Vec<u8>,
}

impl Parameters {
    /// Create parameters with the given costs and a random salt of `length`
    /// bytes taken from the operating system's secure random source.
    ///
    /// No minimums are enforced here; out of range costs are reported by the
    /// derivation step instead.
    ///
    /// # Errors
    /// * `RandomnessUnavailable` - the OS random source could not supply bytes
    pub fn new(time: u32, memory: u32, threads: u8, length: u32) -> Result<Self> {
        let mut salt = vec![0u8; length as usize];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| HashError::RandomnessUnavailable(e.to_string()))?;

        debug!(time, memory, threads, length, "Generated new hash parameters");

        Ok(Self {
            time,
            memory,
            threads,
            length,
            salt,
        })
    }

    /// Create parameters from a cost profile, with a fresh salt
    pub fn generate(costs: &CostSettings) -> Result<Self> {
        Self::new(costs.time, costs.memory, costs.threads, costs.length)
    }

    /// The cost profile these parameters were built with
    pub fn costs(&self) -> CostSettings {
        CostSettings {
            time: self.time,
            memory: self.memory,
            threads: self.threads,
            length: self.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parameters() {
        let params = Parameters::new(1, 64 * 1024, 1, 4).unwrap();

        assert_eq!(params.time, 1);
        assert_eq!(params.memory, 64 * 1024);
        assert_eq!(params.threads, 1);
        assert_eq!(params.length, 4);
        assert_eq!(params.salt.len(), 4);
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let params1 = Parameters::new(1, 64 * 1024, 1, 16).unwrap();
        let params2 = Parameters::new(1, 64 * 1024, 1, 16).unwrap();

        assert_ne!(params1.salt, params2.salt);
    }

    #[test]
    fn test_generate_from_costs() {
        let costs = CostSettings {
            time: 2,
            memory: 4096,
            threads: 2,
            length: 24,
        };

        let params = Parameters::generate(&costs).unwrap();
        assert_eq!(params.salt.len(), 24);
        assert_eq!(params.costs(), costs);
    }

    #[test]
    fn test_default_costs() {
        let costs = CostSettings::default();
        assert_eq!(costs.memory, 65536);
        assert_eq!(costs.time, 3);
        assert_eq!(costs.threads, 4);
        assert_eq!(costs.length, 32);
    }
}
