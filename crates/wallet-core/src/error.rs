//! Error types for wallet core operations.
//!
//! Hard failures abort the current operation and are surfaced to the caller.
//! Soft outcomes (editing an unknown id, a search with no matches) are not
//! errors; they are ordinary return values, see [`crate::EditOutcome`] and
//! [`crate::SearchHit`].

use thiserror::Error;

/// Result type alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Core error type for wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet document is missing or is not a valid wallet document
    #[error("Wallet data unavailable: {0}")]
    StorageUnavailable(String),

    /// Refusing to replace an existing wallet document
    #[error("Wallet already exists at {0}")]
    AlreadyExists(String),

    /// Writing the wallet document failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Amount must be a positive integer
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(i64),

    /// Category outside of income/expense
    #[error("Invalid category: \"{0}\" (expected income or expense)")]
    InvalidCategory(String),

    /// An expense would take the balance below zero
    #[error("Balance cannot go below zero: wallet holds {balance}, expense is {amount}")]
    InsufficientFunds { balance: i64, amount: i64 },

    /// Date literal that is not YYYY-MM-DD
    #[error("Invalid date: \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl WalletError {
    /// Whether the error comes from caller input rather than from storage.
    ///
    /// Input errors are recoverable by asking the user again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WalletError::InvalidAmount(_)
                | WalletError::InvalidCategory(_)
                | WalletError::InsufficientFunds { .. }
                | WalletError::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::StorageUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_classified() {
        assert!(WalletError::InvalidAmount(0).is_input_error());
        assert!(WalletError::InvalidCategory("gift".into()).is_input_error());
        assert!(WalletError::InsufficientFunds {
            balance: 10,
            amount: 20
        }
        .is_input_error());
        assert!(!WalletError::StorageUnavailable("missing".into()).is_input_error());
        assert!(!WalletError::Storage("disk full".into()).is_input_error());
    }

    #[test]
    fn test_json_error_maps_to_unavailable() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mapped: WalletError = err.into();
        assert!(matches!(mapped, WalletError::StorageUnavailable(_)));
    }
}
