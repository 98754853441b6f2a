//! Parsing encoded hashes back into parameters and digest

use std::str::FromStr;

use base64::Engine;

use super::{Sections, B64};
use crate::digest::Digest;
use crate::error::{HashError, Result};
use crate::kdf::VERSION;
use crate::params::Parameters;

/// Read the parameters that were used to generate an encoded hash.
///
/// The digest is not decoded. `length` is taken from the decoded salt,
/// which is how [`Parameters::new`] sizes the salt.
///
/// # Errors
/// * `InvalidHash` - wrong section count or a malformed version or cost section
/// * `UnsupportedVersion` - a version other than 19
/// * `Base64` - the salt is not valid unpadded base64
pub fn get_parameters_from_hash(hash: &[u8]) -> Result<Parameters> {
    let sections = Sections::split(hash)?;
    parameters_from_sections(&sections)
}

/// Read both the parameters and the stored digest of an encoded hash.
///
/// Unlike [`get_parameters_from_hash`], `length` is set to the stored digest
/// length, so the result can be fed straight back into the derivation.
pub fn decode(hash: &[u8]) -> Result<(Parameters, Digest)> {
    let sections = Sections::split(hash)?;
    let digest = decode_digest(&sections)?;
    let mut params = parameters_from_sections(&sections)?;
    params.length = digest_length(&digest)?;
    Ok((params, digest))
}

pub(crate) fn parameters_from_sections(sections: &Sections<'_>) -> Result<Parameters> {
    parse_version(sections.version)?;

    let (memory, time, threads) = parse_costs(sections.costs)?;

    let salt = B64.decode(sections.salt)?;
    let length = u32::try_from(salt.len()).map_err(|_| HashError::InvalidHash)?;

    Ok(Parameters {
        time,
        memory,
        threads,
        length,
        salt,
    })
}

pub(crate) fn decode_digest(sections: &Sections<'_>) -> Result<Digest> {
    let digest = Digest::new(B64.decode(sections.digest)?);
    if digest.is_empty() {
        return Err(HashError::InvalidHash);
    }
    Ok(digest)
}

pub(crate) fn digest_length(digest: &Digest) -> Result<u32> {
    u32::try_from(digest.len()).map_err(|_| HashError::InvalidHash)
}

/// Parse `v=<int>` and accept only the version this crate derives with
fn parse_version(section: &str) -> Result<()> {
    let version: u32 = parse_field(section, "v")?;
    if version != VERSION {
        return Err(HashError::UnsupportedVersion(version));
    }
    Ok(())
}

/// Parse `m=<int>,t=<int>,p=<int>` in exactly that order
fn parse_costs(section: &str) -> Result<(u32, u32, u8)> {
    let mut fields = section.split(',');

    let memory = parse_field(fields.next().unwrap_or_default(), "m")?;
    let time = parse_field(fields.next().unwrap_or_default(), "t")?;
    let threads = parse_field(fields.next().unwrap_or_default(), "p")?;

    if fields.next().is_some() {
        return Err(HashError::InvalidHash);
    }

    Ok((memory, time, threads))
}

/// Parse a single `<label>=<digits>` field
fn parse_field<T: FromStr>(field: &str, label: &str) -> Result<T> {
    let value = field
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(HashError::InvalidHash)?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HashError::InvalidHash);
    }

    value.parse().map_err(|_| HashError::InvalidHash)
}
