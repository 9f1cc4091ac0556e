//! `wallet balance`: show the running totals.

use crate::app::AppContext;
use crate::cli::BalanceArgs;
use crate::output::{print_summary, summary_json};
use crate::ui::{header, print};

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let summary = store.summary()?;
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary_json(&summary))?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let path = ctx.wallet_path()?.display().to_string();
        print(&ui_ctx, &header(&ui_ctx, "balance", Some(&path)));
    }
    print_summary(&ui_ctx, &summary);
    Ok(())
}
