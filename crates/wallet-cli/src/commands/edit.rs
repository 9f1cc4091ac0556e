//! `wallet edit`: change the amount and/or description of a record.

use wallet_core::EditOutcome;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::output::{print_record, record_json, summary_json};
use crate::ui::{badge, print, Badge};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let outcome = store.edit_record(args.id, args.amount, args.description.as_deref())?;

    let (record, summary) = match outcome {
        EditOutcome::Updated { record, summary } => (record, summary),
        EditOutcome::NotFound { id } => {
            return Err(CliError::not_found(
                format!("No record with id {}", id),
                "Hint: Find ids with `wallet search --category income` or `wallet search --category expense`.",
            )
            .into());
        }
    };

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "record": record_json(&record),
            "summary": summary_json(&summary),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &badge(&ui_ctx, Badge::Ok, &format!("Record {} updated", record.id)),
        );
    } else {
        println!("status=ok");
    }
    print_record(&ui_ctx, &record);
    Ok(())
}
