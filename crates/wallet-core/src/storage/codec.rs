//! JSON encoding shared by every storage backend.
//!
//! Documents are written with a four-space indent and non-ASCII text kept
//! verbatim, the layout existing wallet files already use.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::types::Ledger;
use crate::error::{Result, WalletError};

const INDENT: &[u8] = b"    ";

/// Serialize any value as indented JSON text.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| WalletError::Storage(format!("Failed to encode wallet data: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| WalletError::Storage(format!("Encoded wallet data is not UTF-8: {}", e)))
}

/// Encode a ledger into document text.
pub fn encode(ledger: &Ledger) -> Result<String> {
    to_pretty_json(ledger)
}

/// Decode document text into a ledger.
pub fn decode(text: &str) -> Result<Ledger> {
    serde_json::from_str(text)
        .map_err(|e| WalletError::StorageUnavailable(format!("Malformed wallet data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::Summary;

    #[test]
    fn test_encode_uses_four_space_indent_and_keeps_cyrillic() {
        let ledger = Ledger {
            summary: Summary {
                income: 1,
                expense: 0,
                balance: 1,
            },
            records: Vec::new(),
        };

        let text = encode(&ledger).unwrap();
        assert!(text.contains("\n    \"wallet_data\""));
        assert!(text.contains("\"доход\": 1"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode("not a wallet").unwrap_err();
        assert!(matches!(err, WalletError::StorageUnavailable(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode(r#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, WalletError::StorageUnavailable(_)));
    }
}
