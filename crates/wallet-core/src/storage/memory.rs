//! In-memory backend holding the encoded document text.
//!
//! Goes through the same JSON codec as the file backend, which keeps
//! engine tests honest about serialization.

use super::codec::{decode, encode};
use super::traits::DocumentStore;
use super::types::Ledger;
use crate::error::{Result, WalletError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    document: Option<String>,
}

impl MemoryStorage {
    /// An empty backend with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-loaded with raw document text.
    pub fn with_document(text: impl Into<String>) -> Self {
        Self {
            document: Some(text.into()),
        }
    }

    /// Raw document text, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DocumentStore for MemoryStorage {
    fn exists(&self) -> bool {
        self.document.is_some()
    }

    fn read(&self) -> Result<Ledger> {
        let text = self
            .document
            .as_deref()
            .ok_or_else(|| WalletError::StorageUnavailable("No wallet document".to_string()))?;
        decode(text)
    }

    fn write(&mut self, ledger: &Ledger) -> Result<()> {
        self.document = Some(encode(ledger)?);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
