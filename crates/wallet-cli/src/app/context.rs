//! Per-run application context.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file so
//! handlers do not thread both around or read the config twice.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use wallet_core::storage::JsonFileStorage;
use wallet_core::LedgerStore;

use crate::cli::Cli;
use crate::config::{read_config, WalletConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_wallet_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<WalletConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, or defaults when none exists.
    pub fn config(&self) -> anyhow::Result<&WalletConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                read_config(&path)
            } else {
                Ok(WalletConfig::default())
            }
        })
    }

    pub fn wallet_path(&self) -> anyhow::Result<PathBuf> {
        resolve_wallet_path(self.cli.wallet.as_deref(), self.config()?)
    }

    /// A ledger store over the resolved wallet file with the configured
    /// policies.
    pub fn open_store(&self) -> anyhow::Result<LedgerStore<JsonFileStorage>> {
        let path = self.wallet_path()?;
        let options = self.config()?.ledger_options();
        tracing::debug!(path = %path.display(), ?options, "opening wallet");
        Ok(LedgerStore::new(JsonFileStorage::new(path)).with_options(options))
    }

    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }
}
