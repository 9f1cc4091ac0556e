//! `wallet add`: append an income or expense record.

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::parse_category;
use crate::output::{record_json, summary_json};
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let mut store = ctx.open_store()?;
    let outcome = store.add_record(category, args.amount, &args.description)?;
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "record": record_json(&outcome.record),
            "summary": summary_json(&outcome.summary),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    let title = format!("{} added", outcome.record.category.label());
    let items = [
        ("Id", outcome.record.id.to_string()),
        ("Amount", outcome.record.amount.to_string()),
        ("Balance", outcome.summary.balance.to_string()),
    ];
    print(&ui_ctx, &receipt(&ui_ctx, &title, &items));
    Ok(())
}
