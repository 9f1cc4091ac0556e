use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wallet_core::{EditPolicy, IdPolicy, LedgerOptions};

use crate::constants::DEFAULT_WALLET_FILE;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub wallet: WalletSection,
    #[serde(default)]
    pub policy: PolicySection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PolicySection {
    #[serde(default)]
    pub edit: EditPolicy,
    #[serde(default)]
    pub ids: IdPolicy,
    #[serde(default)]
    pub allow_negative_balance: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LogSection {
    pub level: Option<String>,
}

impl WalletConfig {
    pub fn new(wallet_path: PathBuf) -> Self {
        Self {
            wallet: WalletSection {
                path: Some(wallet_path.to_string_lossy().to_string()),
            },
            policy: PolicySection::default(),
            log: LogSection {
                level: Some("warn".to_string()),
            },
        }
    }

    pub fn ledger_options(&self) -> LedgerOptions {
        LedgerOptions {
            edit_policy: self.policy.edit,
            id_policy: self.policy.ids,
            allow_negative_balance: self.policy.allow_negative_balance,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_wallet_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_WALLET_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<WalletConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &WalletConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wallet"));
        }
    }
    Ok(home_dir()?.join(".config").join("wallet"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wallet"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("wallet"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: WalletConfig = toml::from_str("").unwrap();
        assert!(config.wallet.path.is_none());
        assert_eq!(config.ledger_options(), LedgerOptions::default());
    }

    #[test]
    fn test_policy_section_parses() {
        let config: WalletConfig = toml::from_str(
            "[policy]\nedit = \"delta\"\nids = \"instance_counter\"\nallow_negative_balance = true\n",
        )
        .unwrap();
        let options = config.ledger_options();
        assert_eq!(options.edit_policy, EditPolicy::Delta);
        assert_eq!(options.id_policy, IdPolicy::InstanceCounter);
        assert!(options.allow_negative_balance);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<WalletConfig, _> = toml::from_str("[policy]\nedit = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = WalletConfig::new(PathBuf::from("/tmp/wallet_data.json"));

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded.wallet.path.as_deref(), Some("/tmp/wallet_data.json"));
        assert_eq!(loaded.log.level.as_deref(), Some("warn"));
        assert_eq!(loaded.policy.edit, EditPolicy::Reapply);
    }
}
