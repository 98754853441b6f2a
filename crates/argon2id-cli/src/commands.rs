//! Command handlers
//!
//! Each handler writes its output to the given writer so the binary can pass
//! stdout and tests can pass a buffer.

use std::io::Write;

use argon2id::{decode, CostSettings, PasswordHasher, SettingsManager, ALGORITHM, VERSION};
use clap::Args;
use tracing::info;

use crate::error::Result;

/// Cost flags that override the configured profile
#[derive(Args, Debug, Clone, Default)]
pub struct CostOverrides {
    /// Iterations
    #[arg(long, short = 't')]
    pub time: Option<u32>,

    /// Memory cost in KiB
    #[arg(long, short = 'm')]
    pub memory: Option<u32>,

    /// Parallelism
    #[arg(long, short = 'p')]
    pub threads: Option<u8>,

    /// Digest and salt length in bytes
    #[arg(long, short = 'l')]
    pub length: Option<u32>,
}

impl CostOverrides {
    /// Apply the flags that were given on top of `base`
    pub fn apply(&self, base: CostSettings) -> CostSettings {
        CostSettings {
            time: self.time.unwrap_or(base.time),
            memory: self.memory.unwrap_or(base.memory),
            threads: self.threads.unwrap_or(base.threads),
            length: self.length.unwrap_or(base.length),
        }
    }
}

/// Hash a password and print the encoded hash
pub fn hash(password: &[u8], costs: &CostSettings, out: &mut impl Write) -> Result<()> {
    let hasher = PasswordHasher::new(*costs);
    let encoded = hasher.hash(password)?;

    writeln!(out, "{}", encoded)?;
    Ok(())
}

/// Verify a password against an encoded hash and print `ok` on success
pub fn verify(encoded: &str, password: &[u8], out: &mut impl Write) -> Result<()> {
    argon2id::compare_hash_and_password(encoded.trim().as_bytes(), password)?;

    writeln!(out, "ok")?;
    Ok(())
}

/// Print the parameters stored in an encoded hash
pub fn inspect(encoded: &str, out: &mut impl Write) -> Result<()> {
    let (params, digest) = decode(encoded.trim().as_bytes())?;

    writeln!(out, "algorithm: {}", ALGORITHM)?;
    writeln!(out, "version:   {}", VERSION)?;
    writeln!(out, "memory:    {} KiB", params.memory)?;
    writeln!(out, "time:      {}", params.time)?;
    writeln!(out, "threads:   {}", params.threads)?;
    writeln!(
        out,
        "salt:      {} ({} bytes)",
        hex::encode(&params.salt),
        params.salt.len()
    )?;
    writeln!(out, "digest:    {} bytes", digest.len())?;
    Ok(())
}

/// Print the settings file location and the effective cost profile
pub fn show_settings(manager: &SettingsManager, out: &mut impl Write) -> Result<()> {
    let costs = manager.costs();

    writeln!(out, "settings:  {}", manager.path().display())?;
    writeln!(out, "memory:    {} KiB", costs.memory)?;
    writeln!(out, "time:      {}", costs.time)?;
    writeln!(out, "threads:   {}", costs.threads)?;
    writeln!(out, "length:    {}", costs.length)?;
    Ok(())
}

/// Write the cost profile, with any overrides applied, to the settings file
pub fn init_settings(manager: &mut SettingsManager, overrides: &CostOverrides) -> Result<()> {
    let costs = overrides.apply(*manager.costs());
    manager.update_costs(costs)?;

    info!("Wrote settings to {:?}", manager.path());
    Ok(())
}
