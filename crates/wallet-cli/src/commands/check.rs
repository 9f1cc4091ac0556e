//! `wallet check`: compare the stored totals against the records.

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::ui::{badge, hint, print, Badge};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let report = store.check_integrity()?;
    let ui_ctx = ctx.ui_context(false, None);

    if report.is_ok() {
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Integrity check passed ({} records)", report.records),
                ),
            );
        }
        return Ok(());
    }

    for issue in &report.issues {
        eprintln!("{}", badge(&ui_ctx, Badge::Warn, &issue.to_string()));
    }

    if args.repair {
        let summary = store.rebuild_summary()?;
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!(
                        "Totals rebuilt: income {}, expense {}, balance {}",
                        summary.income, summary.expense, summary.balance
                    ),
                ),
            );
        }
        // Totals are fixed; record-level problems remain.
        let remaining = store.check_integrity()?;
        if remaining.is_ok() {
            return Ok(());
        }
        return Err(CliError::IntegrityFailed(format!(
            "{} problem(s) remain after repair; fix the records by hand",
            remaining.issues.len()
        ))
        .into());
    }

    eprintln!(
        "{}",
        hint(&ui_ctx, "Run `wallet check --repair` to rebuild the totals")
    );
    Err(CliError::IntegrityFailed(format!(
        "Integrity check failed: {} problem(s)",
        report.issues.len()
    ))
    .into())
}
