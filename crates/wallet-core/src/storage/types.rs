//! Core data types for the wallet document.
//!
//! Field names and category literals are fixed by the on-disk format of
//! existing wallet files and must not change:
//!
//! ```text
//! { "wallet_data": [ { "доход": .., "расход": .., "итог": .. },
//!                    { "номер": .., "дата добавления": .., ... }, ... ] }
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeSeq, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WalletError};

/// Date format used for every date stored in the document.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Transaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "доход")]
    Income,
    #[serde(rename = "расход")]
    Expense,
}

impl Category {
    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Income => write!(f, "income"),
            Category::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for Category {
    type Err = WalletError;

    /// Accepts the stored literals and their English names, case-insensitive.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "доход" | "income" => Ok(Category::Income),
            "расход" | "expense" => Ok(Category::Expense),
            _ => Err(WalletError::InvalidCategory(value.trim().to_string())),
        }
    }
}

/// Running totals, always the first element of `wallet_data`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "доход")]
    pub income: i64,

    #[serde(rename = "расход")]
    pub expense: i64,

    #[serde(rename = "итог")]
    pub balance: i64,
}

impl Summary {
    /// Rebuild totals from scratch out of a record list.
    ///
    /// Fails with `WalletError::InvalidAmount` naming the first record
    /// amount that pushes a total out of `i64` range.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        records.iter().try_fold(Summary::default(), |summary, record| {
            recompute_summary(record.category, record.amount, summary)
        })
    }
}

/// Apply one amount to a summary.
///
/// Income raises both the income total and the balance; expense raises the
/// expense total and lowers the balance. A total that would leave `i64`
/// range is reported as `WalletError::InvalidAmount`.
pub fn recompute_summary(category: Category, amount: i64, summary: Summary) -> Result<Summary> {
    let overflow = || WalletError::InvalidAmount(amount);
    match category {
        Category::Income => Ok(Summary {
            income: summary.income.checked_add(amount).ok_or_else(overflow)?,
            balance: summary.balance.checked_add(amount).ok_or_else(overflow)?,
            ..summary
        }),
        Category::Expense => Ok(Summary {
            expense: summary.expense.checked_add(amount).ok_or_else(overflow)?,
            balance: summary.balance.checked_sub(amount).ok_or_else(overflow)?,
            ..summary
        }),
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "номер")]
    pub id: u64,

    /// Date of insertion, never changes
    #[serde(rename = "дата добавления")]
    pub created: NaiveDate,

    /// Date of the last edit; stored as an empty string until then
    #[serde(rename = "дата изменения", with = "optional_date", default)]
    pub modified: Option<NaiveDate>,

    #[serde(rename = "категория")]
    pub category: Category,

    #[serde(rename = "сумма")]
    pub amount: i64,

    #[serde(rename = "описание", default)]
    pub description: String,
}

mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

/// Parse a `YYYY-MM-DD` date literal.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| WalletError::InvalidDate(value.trim().to_string()))
}

/// The whole persisted document: summary plus records in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub summary: Summary,
    pub records: Vec<Record>,
}

impl Ledger {
    /// Largest id in use, or 0 for an empty ledger.
    pub fn max_id(&self) -> u64 {
        self.records.iter().map(|record| record.id).max().unwrap_or(0)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.id == id)
    }
}

struct WalletData<'a>(&'a Ledger);

impl Serialize for WalletData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.records.len() + 1))?;
        seq.serialize_element(&self.0.summary)?;
        for record in &self.0.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl Serialize for Ledger {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut document = serializer.serialize_struct("Ledger", 1)?;
        document.serialize_field("wallet_data", &WalletData(self))?;
        document.end()
    }
}

#[derive(Deserialize)]
struct RawLedger {
    wallet_data: Vec<serde_json::Value>,
}

impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawLedger::deserialize(deserializer)?;
        let mut entries = raw.wallet_data.into_iter();
        let summary_value = entries
            .next()
            .ok_or_else(|| D::Error::custom("wallet_data has no summary entry"))?;
        let summary = Summary::deserialize(summary_value)
            .map_err(|e| D::Error::custom(format!("invalid summary entry: {}", e)))?;
        let records = entries
            .enumerate()
            .map(|(index, value)| {
                Record::deserialize(value).map_err(|e| {
                    D::Error::custom(format!("invalid record at position {}: {}", index + 1, e))
                })
            })
            .collect::<std::result::Result<Vec<_>, D::Error>>()?;
        Ok(Ledger { summary, records })
    }
}
