//! JSON output for records and totals.

use wallet_core::storage::{Record, Summary, DATE_FORMAT};

pub fn record_json(record: &Record) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "created": record.created.format(DATE_FORMAT).to_string(),
        "modified": record.modified.map(|d| d.format(DATE_FORMAT).to_string()),
        "category": record.category.to_string(),
        "amount": record.amount,
        "description": record.description,
    })
}

pub fn records_json(records: &[Record]) -> Vec<serde_json::Value> {
    records.iter().map(record_json).collect()
}

pub fn summary_json(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "income": summary.income,
        "expense": summary.expense,
        "balance": summary.balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wallet_core::storage::Category;

    #[test]
    fn test_record_json_fields() {
        let record = Record {
            id: 5,
            created: NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
            modified: None,
            category: Category::Expense,
            amount: 600,
            description: "памперс".to_string(),
        };
        let value = record_json(&record);
        assert_eq!(value["id"], 5);
        assert_eq!(value["created"], "2024-05-05");
        assert!(value["modified"].is_null());
        assert_eq!(value["category"], "expense");
        assert_eq!(value["description"], "памперс");
    }

    #[test]
    fn test_summary_json() {
        let summary = Summary {
            income: 18500,
            expense: 3900,
            balance: 14600,
        };
        assert_eq!(
            summary_json(&summary),
            serde_json::json!({"income": 18500, "expense": 3900, "balance": 14600})
        );
    }
}
