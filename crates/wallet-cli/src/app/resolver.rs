//! Path resolution for the config and wallet files.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, default_wallet_path, WalletConfig};

/// Config file location: `WALLET_CONFIG` first, then the XDG default.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("WALLET_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Wallet file location: `--wallet` / `WALLET_PATH`, then the config file,
/// then the XDG data directory.
pub fn resolve_wallet_path(flag: Option<&str>, config: &WalletConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.wallet.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_wallet_path()
}

pub fn missing_wallet_message(path: &Path) -> String {
    format!("No wallet found at {}", path.display())
}
