//! Wallet CLI - a personal income and expense ledger
//!
//! Subcommands for scripting plus an interactive session, both on top of
//! `wallet-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod shell;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, balance, check, edit, init, misc, search, shell as shell_cmd};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let config_level = ctx
        .config()
        .ok()
        .and_then(|config| config.log.level.clone());
    logging::init(cli.verbose, config_level.as_deref());

    if let Err(err) = run(&ctx, &cli) {
        tracing::debug!(error = ?err, "command failed");
        let ui_ctx = ctx.ui_context(false, None);
        let message = err.to_string();
        let (message, hint) = split_hint(&message);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&err));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(message: &str) -> (&str, Option<&str>) {
    match message.find("\nHint:") {
        Some(idx) => (
            &message[..idx],
            Some(message[idx + "\nHint:".len()..].trim()),
        ),
        None => (message, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Shell) => shell_cmd::handle_shell(ctx),
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Balance(args)) => balance::handle_balance(ctx, args),
        Some(Commands::Add(args)) => add::handle_add(ctx, args),
        Some(Commands::Edit(args)) => edit::handle_edit(ctx, args),
        Some(Commands::Search(args)) => search::handle_search(ctx, args),
        Some(Commands::Check(args)) => check::handle_check(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("No record with id 9\nHint: Find ids first.");
        assert_eq!(message, "No record with id 9");
        assert_eq!(hint, Some("Find ids first."));
    }

    #[test]
    fn test_split_hint_without_hint() {
        assert_eq!(split_hint("boom"), ("boom", None));
    }
}
