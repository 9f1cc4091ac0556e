//! Text and table output for records and totals.

use wallet_core::storage::{Record, Summary};

use crate::ui::format::{format_date, single_line, truncate};
use crate::ui::theme::{amount_style, styled};
use crate::ui::{kv, simple_table, Column, UiContext};

const RECORD_COLUMNS: [Column; 6] = [
    Column::numeric("Id"),
    Column::text("Created"),
    Column::text("Modified"),
    Column::text("Category"),
    Column::numeric("Amount"),
    Column::text("Description"),
];

/// Widest description cell before truncation.
const DESCRIPTION_WIDTH: usize = 40;

fn record_row(record: &Record, pretty: bool) -> Vec<String> {
    let description = single_line(&record.description);
    vec![
        record.id.to_string(),
        record.created.to_string(),
        format_date(record.modified),
        record.category.to_string(),
        record.amount.to_string(),
        if pretty {
            truncate(&description, DESCRIPTION_WIDTH)
        } else {
            description
        },
    ]
}

pub fn print_record_list(ctx: &UiContext, records: &[Record]) {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| record_row(record, ctx.mode.is_pretty()))
        .collect();
    println!("{}", simple_table(ctx, &RECORD_COLUMNS, &rows));
}

/// One record as key/value lines.
pub fn print_record(ctx: &UiContext, record: &Record) {
    let fields = [
        ("Id", record.id.to_string()),
        ("Created", record.created.to_string()),
        ("Modified", format_date(record.modified)),
        ("Category", record.category.to_string()),
        ("Amount", record.amount.to_string()),
        ("Description", single_line(&record.description)),
    ];
    for (key, value) in fields {
        println!("{}", kv(ctx, key, &value));
    }
}

pub fn print_summary(ctx: &UiContext, summary: &Summary) {
    println!("{}", kv(ctx, "Income", &summary.income.to_string()));
    println!("{}", kv(ctx, "Expense", &summary.expense.to_string()));
    let balance = summary.balance.to_string();
    let balance = if ctx.mode.is_pretty() {
        styled(&balance, amount_style(summary.balance), ctx.color)
    } else {
        balance
    };
    println!("{}", kv(ctx, "Balance", &balance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wallet_core::storage::Category;

    fn record(description: &str) -> Record {
        Record {
            id: 2,
            created: NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
            modified: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            category: Category::Income,
            amount: 12000,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_record_row_plain_keeps_full_description() {
        let long = "x".repeat(60);
        let row = record_row(&record(&long), false);
        assert_eq!(row[0], "2");
        assert_eq!(row[1], "2024-05-05");
        assert_eq!(row[2], "2024-06-01");
        assert_eq!(row[3], "income");
        assert_eq!(row[5].len(), 60);
    }

    #[test]
    fn test_record_row_pretty_truncates() {
        let long = "x".repeat(60);
        let row = record_row(&record(&long), true);
        assert_eq!(row[5].chars().count(), DESCRIPTION_WIDTH);
        assert!(row[5].ends_with("..."));
    }
}
