//! Parsing helpers for amounts, ids, dates, categories and output format.

use chrono::NaiveDate;
use wallet_core::storage::{parse_date, Category};

use crate::errors::CliError;

/// Parse a whole-number amount. Sign is checked by the ledger, not here.
pub fn parse_amount(value: &str) -> anyhow::Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| {
            CliError::invalid_input(format!("Amount must be a whole number: {}", value.trim()))
                .into()
        })
}

pub fn parse_id(value: &str) -> anyhow::Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| {
            CliError::invalid_input(format!(
                "Record id must be a positive whole number: {}",
                value.trim()
            ))
            .into()
        })
}

/// Accepts income/expense and доход/расход, case-insensitive.
pub fn parse_category(value: &str) -> anyhow::Result<Category> {
    Ok(value.parse::<Category>()?)
}

/// Parse a `YYYY-MM-DD` date given on the command line or in the shell.
pub fn parse_date_arg(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(parse_date(value)?)
}

/// Amount and/or description typed on one line when editing a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditInput {
    pub amount: Option<i64>,
    pub description: Option<String>,
}

/// Split an edit line into its parts.
///
/// `"<int> <text>"` sets both, a lone `"<int>"` sets only the amount, and
/// anything else is taken whole as the new description. A blank line
/// changes neither, and an empty text after the amount keeps the old
/// description.
pub fn parse_edit_input(line: &str) -> EditInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return EditInput::default();
    }
    if let Some((head, tail)) = line.split_once(' ') {
        if let Ok(amount) = head.parse::<i64>() {
            return EditInput {
                amount: Some(amount),
                description: Some(tail.to_string()).filter(|text| !text.is_empty()),
            };
        }
    } else if let Ok(amount) = line.trim().parse::<i64>() {
        return EditInput {
            amount: Some(amount),
            description: None,
        };
    }
    EditInput {
        amount: None,
        description: Some(line.to_string()),
    }
}

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_core::WalletError;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 2000\n").unwrap(), 2000);
        assert_eq!(parse_amount("-5").unwrap(), -5);
        assert!(parse_amount("12.5").is_err());
        assert!(parse_amount("много").is_err());
    }

    #[test]
    fn test_parse_id_rejects_negative() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Доход").unwrap(), Category::Income);
        assert_eq!(parse_category("expense").unwrap(), Category::Expense);

        let err = parse_category("salary").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WalletError>(),
            Some(WalletError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-05-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()
        );
        assert!(parse_date_arg("05.05.2024").is_err());
    }

    #[test]
    fn test_edit_input_amount_and_description() {
        assert_eq!(
            parse_edit_input("500 new shoes"),
            EditInput {
                amount: Some(500),
                description: Some("new shoes".to_string()),
            }
        );
    }

    #[test]
    fn test_edit_input_amount_only() {
        assert_eq!(
            parse_edit_input("750\n"),
            EditInput {
                amount: Some(750),
                description: None,
            }
        );
    }

    #[test]
    fn test_edit_input_description_only() {
        assert_eq!(
            parse_edit_input("подарок маме"),
            EditInput {
                amount: None,
                description: Some("подарок маме".to_string()),
            }
        );
    }

    #[test]
    fn test_edit_input_trailing_space_keeps_description() {
        assert_eq!(
            parse_edit_input("300 "),
            EditInput {
                amount: Some(300),
                description: None,
            }
        );
    }

    #[test]
    fn test_edit_input_blank_line() {
        assert_eq!(parse_edit_input("\n"), EditInput::default());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
