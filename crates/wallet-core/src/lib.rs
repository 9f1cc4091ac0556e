//! # Wallet Core
//!
//! Core library for Wallet - a personal income/expense ledger kept in a
//! single JSON document.
//!
//! This crate provides the ledger engine, the document model, and storage
//! backends, independent of the command-line and interactive front ends.
//!
//! ## Architecture
//!
//! - **storage**: Document model (summary + records), JSON codec, backends
//! - **store**: `LedgerStore`, the load → mutate → save engine
//! - **search**: Any-field record search
//! - **clock**: Source of record dates
//!
//! ## Example
//!
//! ```no_run
//! use wallet_core::storage::{Category, JsonFileStorage};
//! use wallet_core::LedgerStore;
//!
//! let mut store = LedgerStore::new(JsonFileStorage::new("wallet_data.json"));
//! let outcome = store.add_record(Category::Income, 2000, "salary")?;
//! println!("{}", outcome);
//! # Ok::<(), wallet_core::WalletError>(())
//! ```

pub mod clock;
pub mod error;
pub mod fs;
pub mod search;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, WalletError};
pub use search::{SearchFilter, SearchHit, SearchResults, NO_MATCHES_MESSAGE};
pub use storage::DocumentStore;
pub use store::{
    AddOutcome, EditOutcome, EditPolicy, IdPolicy, IntegrityIssue, IntegrityReport,
    LedgerOptions, LedgerStore,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
