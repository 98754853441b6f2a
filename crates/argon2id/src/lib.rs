//! # argon2id
//!
//! Argon2id password hashing with a self-describing encoded format:
//!
//! `$argon2id$v=19$m=<memory>,t=<time>,p=<threads>$<salt>$<digest>`
//!
//! - Parameter generation with a fresh OS-random salt per hash
//! - Encoding and strict decoding of the hash format
//! - Verification with constant-time digest comparison
//! - Optional JSON settings file holding the default cost profile
//!
//! ```no_run
//! use argon2id::{compare_hash_and_password, generate_from_password, Parameters};
//!
//! let params = Parameters::new(3, 64 * 1024, 4, 32).unwrap();
//! let hash = generate_from_password(b"hunter2", &params).unwrap();
//!
//! assert!(compare_hash_and_password(hash.as_bytes(), b"hunter2").is_ok());
//! ```

pub mod digest;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod kdf;
pub mod params;
pub mod settings;
mod verify;

pub use digest::Digest;
pub use encoding::{decode, generate_from_password, get_parameters_from_hash, EncodedHash, ALGORITHM};
pub use error::{HashError, Result};
pub use hasher::PasswordHasher;
pub use kdf::VERSION;
pub use params::{CostSettings, Parameters};
pub use settings::{Settings, SettingsManager};
pub use verify::{compare_hash_and_password, needs_rehash};
