//! Error types for the command-line front end

use argon2id::HashError;
use thiserror::Error;

/// Result type alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 1 for a wrong password, 2 for anything else
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Hash(e) if e.is_mismatch() => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(HashError::PasswordMismatch).exit_code(), 1);
        assert_eq!(CliError::from(HashError::InvalidHash).exit_code(), 2);
        assert_eq!(
            CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "closed")).exit_code(),
            2
        );
    }
}
