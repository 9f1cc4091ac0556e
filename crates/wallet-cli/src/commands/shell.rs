//! `wallet` / `wallet shell`: the interactive session over stdin/stdout.

use wallet_core::DocumentStore;

use crate::app::{missing_wallet_message, AppContext};
use crate::errors::CliError;
use crate::shell::Session;

pub fn handle_shell(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    if !store.storage().exists() {
        return Err(CliError::not_found(
            missing_wallet_message(&ctx.wallet_path()?),
            "Hint: Run `wallet init` to create one.",
        )
        .into());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());
    session.run()
}
