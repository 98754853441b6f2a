//! # argon2id-cli
//!
//! Command-line front end for the argon2id library.
//! Hashes passwords, verifies them against encoded hashes, and shows the
//! parameters stored in a hash.

mod commands;
mod error;

pub use commands::{hash, init_settings, inspect, show_settings, verify, CostOverrides};
pub use error::{CliError, Result};
