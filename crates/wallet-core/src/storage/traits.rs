//! Document store trait definition.
//!
//! The `DocumentStore` trait is the seam between the ledger engine and the
//! place the wallet document lives. The engine always reads and writes the
//! whole document; backends never see partial updates.

use super::types::Ledger;
use crate::error::Result;

/// Whole-document persistence for a wallet.
///
/// Implementations must ensure:
/// - `read` fails with `WalletError::StorageUnavailable` when the document is
///   missing or malformed
/// - `write` replaces the document as a unit (no partially written state is
///   observable by a later `read`)
pub trait DocumentStore {
    /// Whether a document currently exists.
    fn exists(&self) -> bool;

    /// Load the full document.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::StorageUnavailable` if:
    /// - No document exists
    /// - The document is not valid JSON
    /// - The JSON does not have the wallet layout
    fn read(&self) -> Result<Ledger>;

    /// Replace the full document.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Storage` if the document cannot be written.
    fn write(&mut self, ledger: &Ledger) -> Result<()>;

    /// Human-readable location, used in log lines and messages.
    fn location(&self) -> String;
}
