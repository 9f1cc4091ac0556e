//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use wallet_core::WalletError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (wallet file, record)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Totals disagree with the records
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for any error bubbling out of a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<WalletError>() {
        Some(WalletError::StorageUnavailable(_)) => exit_codes::NOT_FOUND,
        Some(core_err) if core_err.is_input_error() => exit_codes::INVALID_INPUT,
        Some(WalletError::AlreadyExists(_)) => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::not_found("missing", "hint").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::invalid_input("bad").exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let unavailable = anyhow::Error::new(WalletError::StorageUnavailable("gone".into()));
        assert_eq!(exit_code_for(&unavailable), exit_codes::NOT_FOUND);

        let amount = anyhow::Error::new(WalletError::InvalidAmount(0));
        assert_eq!(exit_code_for(&amount), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), 1);
    }
}
