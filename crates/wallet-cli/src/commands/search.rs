//! `wallet search`: list records matching any of the given criteria.

use wallet_core::{SearchFilter, SearchHit, NO_MATCHES_MESSAGE};

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::{parse_category, parse_date_arg, parse_output_format};
use crate::output::{print_record_list, records_json};
use crate::ui::{header, print};

fn build_filter(args: &SearchArgs) -> anyhow::Result<SearchFilter> {
    let mut filter = SearchFilter::new();
    if let Some(id) = args.id {
        filter = filter.id(id);
    }
    if let Some(ref value) = args.created {
        filter = filter.created(parse_date_arg(value)?);
    }
    if let Some(ref value) = args.modified {
        filter = filter.modified(parse_date_arg(value)?);
    }
    if let Some(ref value) = args.category {
        filter = filter.category(parse_category(value)?);
    }
    if let Some(amount) = args.amount {
        filter = filter.amount(amount);
    }
    Ok(filter)
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let filter = build_filter(args)?;
    if filter.is_empty() {
        tracing::warn!("search without criteria matches nothing");
    }
    let store = ctx.open_store()?;

    let records: Vec<_> = store
        .search_records(&filter)?
        .filter_map(|hit| match hit {
            SearchHit::Record(record) => Some(record),
            SearchHit::NoMatches => None,
        })
        .collect();
    tracing::debug!(matches = records.len(), "search finished");

    let ui_ctx = ctx.ui_context(args.json, format.map(|f| f.as_str()));
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
        return Ok(());
    }

    if records.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, NO_MATCHES_MESSAGE);
        }
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let context = format!("{} found", records.len());
        print(&ui_ctx, &header(&ui_ctx, &format!("search ({})", context), None));
    }
    print_record_list(&ui_ctx, &records);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_core::storage::Category;

    fn args() -> SearchArgs {
        SearchArgs {
            id: None,
            created: None,
            modified: None,
            category: None,
            amount: None,
            json: false,
            format: None,
        }
    }

    #[test]
    fn test_no_criteria_gives_empty_filter() {
        assert!(build_filter(&args()).unwrap().is_empty());
    }

    #[test]
    fn test_filter_from_args() {
        let mut search = args();
        search.category = Some("расход".to_string());
        search.amount = Some(600);
        let filter = build_filter(&search).unwrap();
        assert_eq!(
            filter,
            SearchFilter::new().category(Category::Expense).amount(600)
        );
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let mut search = args();
        search.created = Some("yesterday".to_string());
        assert!(build_filter(&search).is_err());
    }
}
