//! JSON file backend: the wallet document is one file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::codec::{decode, encode};
use super::traits::DocumentStore;
use super::types::Ledger;
use crate::error::{Result, WalletError};
use crate::fs::write_atomic;

/// Wallet document stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStorage {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Ledger> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WalletError::StorageUnavailable(format!(
                "No wallet file at {}",
                self.path.display()
            )),
            _ => WalletError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            )),
        })?;
        let ledger = decode(&text).map_err(|e| match e {
            WalletError::StorageUnavailable(reason) => {
                WalletError::StorageUnavailable(format!("{} ({})", reason, self.path.display()))
            }
            other => other,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = ledger.records.len(),
            "loaded wallet document"
        );
        Ok(ledger)
    }

    fn write(&mut self, ledger: &Ledger) -> Result<()> {
        let text = encode(ledger)?;
        write_atomic(&self.path, text.as_bytes()).map_err(|e| {
            WalletError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = ledger.records.len(),
            "saved wallet document"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("wallet_data.json"));

        assert!(!storage.exists());
        let err = storage.read().unwrap_err();
        assert!(matches!(err, WalletError::StorageUnavailable(ref m) if m.contains("No wallet file")));
    }

    #[test]
    fn test_read_malformed_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallet_data.json");
        fs::write(&path, "{ broken").unwrap();

        let err = JsonFileStorage::new(&path).read().unwrap_err();
        assert!(matches!(err, WalletError::StorageUnavailable(ref m) if m.contains("wallet_data.json")));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("wallet_data.json"));

        storage.write(&Ledger::default()).unwrap();

        assert!(storage.exists());
        assert_eq!(storage.read().unwrap(), Ledger::default());
    }
}
