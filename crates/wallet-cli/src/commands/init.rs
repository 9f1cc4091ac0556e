//! `wallet init`: create an empty wallet file and a default config.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Confirm;
use wallet_core::storage::JsonFileStorage;
use wallet_core::LedgerStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, WalletConfig};
use crate::ui::{header, hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let ui_ctx = ctx.ui_context(false, None);

    let wallet_path = match args.path.as_deref() {
        Some(value) => PathBuf::from(value),
        None => ctx.wallet_path()?,
    };

    let mut force = args.force;
    if wallet_path.exists() && !force && interactive {
        let replace = Confirm::new()
            .with_prompt(format!(
                "A wallet already exists at {}. Replace it with an empty one?",
                wallet_path.display()
            ))
            .default(false)
            .interact()?;
        if !replace {
            return Err(anyhow::anyhow!("Initialization cancelled"));
        }
        force = true;
    }

    if let Some(parent) = wallet_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }

    let options = ctx.config()?.ledger_options();
    let mut store = LedgerStore::new(JsonFileStorage::new(&wallet_path)).with_options(options);
    store.init(force)?;

    let config_path = resolve_config_path()?;
    let wrote_config = if config_path.exists() {
        false
    } else {
        write_config(&config_path, &WalletConfig::new(wallet_path.clone()))?;
        tracing::info!(path = %config_path.display(), "wrote default config");
        true
    };

    if ctx.quiet() {
        return Ok(());
    }

    let path_text = wallet_path.display().to_string();
    print(&ui_ctx, &header(&ui_ctx, "init", None));
    let mut items = vec![("Path", path_text)];
    if wrote_config {
        items.push(("Config", config_path.display().to_string()));
    }
    print(&ui_ctx, &receipt(&ui_ctx, "Wallet initialized", &items));
    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &hint(&ui_ctx, "wallet add income 1000 -d salary  \u{00B7}  wallet"),
        );
    }
    Ok(())
}
