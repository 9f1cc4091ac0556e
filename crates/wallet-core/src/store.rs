//! The ledger engine.
//!
//! `LedgerStore` performs every operation as a full load → mutate → save
//! cycle against its [`DocumentStore`]. Nothing is cached between calls, so
//! the persisted document stays the only source of truth.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, WalletError};
use crate::search::{SearchFilter, SearchResults};
use crate::storage::codec::to_pretty_json;
use crate::storage::{recompute_summary, Category, DocumentStore, Ledger, Record, Summary};

/// How an amount edit is reflected in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Apply the new amount again as if it were a fresh entry.
    ///
    /// Matches how existing wallet files were maintained: the old amount
    /// stays counted, so totals drift away from the record sum.
    #[default]
    Reapply,
    /// Apply only the difference between the new and the old amount.
    Delta,
}

/// How the id of a new record is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// One past the largest id in the document.
    #[default]
    NextAfterMax,
    /// A counter owned by the store value, starting at 1 for every new
    /// store. Can collide with ids already on disk.
    InstanceCounter,
}

/// Behavior switches for a [`LedgerStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerOptions {
    pub edit_policy: EditPolicy,
    pub id_policy: IdPolicy,
    /// When false, an expense larger than the balance is rejected.
    pub allow_negative_balance: bool,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub record: Record,
    pub summary: Summary,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added successfully\nBalance: {}",
            self.record.category.label(),
            self.summary.balance
        )
    }
}

/// Result of an edit. A missing id is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated { record: Record, summary: Summary },
    NotFound { id: u64 },
}

impl EditOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, EditOutcome::Updated { .. })
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Updated { record, .. } => {
                let json = to_pretty_json(record).map_err(|_| fmt::Error)?;
                write!(f, "Record {} updated successfully\n{}", record.id, json)
            }
            EditOutcome::NotFound { id } => {
                write!(f, "No record with id {} exists. Try again", id)
            }
        }
    }
}

/// A problem found by [`LedgerStore::check_integrity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    SummaryMismatch { stored: Summary, computed: Summary },
    DuplicateId(u64),
    NonPositiveAmount { id: u64, amount: i64 },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::SummaryMismatch { stored, computed } => write!(
                f,
                "summary does not match records: stored income {} / expense {} / balance {}, records give {} / {} / {}",
                stored.income,
                stored.expense,
                stored.balance,
                computed.income,
                computed.expense,
                computed.balance
            ),
            IntegrityIssue::DuplicateId(id) => write!(f, "id {} is used by more than one record", id),
            IntegrityIssue::NonPositiveAmount { id, amount } => {
                write!(f, "record {} has non-positive amount {}", id, amount)
            }
        }
    }
}

/// Outcome of an integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub records: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Ledger engine over a whole-document store.
pub struct LedgerStore<S: DocumentStore> {
    storage: S,
    options: LedgerOptions,
    clock: Box<dyn Clock>,
    next_id: u64,
}

impl<S: DocumentStore> LedgerStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            options: LedgerOptions::default(),
            clock: Box::new(SystemClock),
            next_id: 1,
        }
    }

    pub fn with_options(mut self, options: LedgerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn options(&self) -> &LedgerOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create an empty wallet document with zeroed totals.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::AlreadyExists` if a document exists and `force`
    /// is false.
    pub fn init(&mut self, force: bool) -> Result<()> {
        if self.storage.exists() && !force {
            return Err(WalletError::AlreadyExists(self.storage.location()));
        }
        self.storage.write(&Ledger::default())?;
        tracing::info!(location = %self.storage.location(), "initialized wallet");
        Ok(())
    }

    /// Read the full document.
    pub fn load(&self) -> Result<Ledger> {
        self.storage.read()
    }

    pub fn summary(&self) -> Result<Summary> {
        Ok(self.load()?.summary)
    }

    pub fn record_count(&self) -> Result<usize> {
        Ok(self.load()?.records.len())
    }

    /// Income, expense and balance as display text.
    pub fn show_summary(&self) -> Result<String> {
        let summary = self.summary()?;
        Ok(format!(
            "Income: {}\nExpense: {}\nBalance: {}",
            summary.income, summary.expense, summary.balance
        ))
    }

    /// Append a new record and update the totals.
    ///
    /// # Errors
    ///
    /// - `WalletError::InvalidAmount` if `amount <= 0` or a total would
    ///   overflow
    /// - `WalletError::InsufficientFunds` if negative balances are not
    ///   allowed and the expense exceeds the balance
    /// - `WalletError::StorageUnavailable` / `WalletError::Storage` on I/O
    ///
    /// Nothing is written when an error is returned.
    pub fn add_record(
        &mut self,
        category: Category,
        amount: i64,
        description: &str,
    ) -> Result<AddOutcome> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount(amount));
        }

        let mut ledger = self.load()?;
        if category == Category::Expense
            && !self.options.allow_negative_balance
            && ledger
                .summary
                .balance
                .checked_sub(amount)
                .map_or(true, |balance| balance < 0)
        {
            return Err(WalletError::InsufficientFunds {
                balance: ledger.summary.balance,
                amount,
            });
        }

        let id = match self.options.id_policy {
            IdPolicy::NextAfterMax => ledger.max_id() + 1,
            IdPolicy::InstanceCounter => self.next_id,
        };
        let record = Record {
            id,
            created: self.clock.today(),
            modified: None,
            category,
            amount,
            description: description.to_string(),
        };

        ledger.summary = recompute_summary(category, amount, ledger.summary)?;
        ledger.records.push(record.clone());
        self.storage.write(&ledger)?;
        self.next_id += 1;

        tracing::info!(id, %category, amount, balance = ledger.summary.balance, "added record");
        Ok(AddOutcome {
            record,
            summary: ledger.summary,
        })
    }

    /// Change the amount and/or description of an existing record.
    ///
    /// The modified date is set to today even when neither field is given.
    /// An empty description counts as not given.
    /// An unknown id yields `EditOutcome::NotFound` and writes nothing.
    ///
    /// # Errors
    ///
    /// - `WalletError::InvalidAmount` if a supplied amount is `<= 0` or a
    ///   total would overflow
    /// - `WalletError::StorageUnavailable` / `WalletError::Storage` on I/O
    pub fn edit_record(
        &mut self,
        id: u64,
        amount: Option<i64>,
        description: Option<&str>,
    ) -> Result<EditOutcome> {
        if let Some(value) = amount {
            if value <= 0 {
                return Err(WalletError::InvalidAmount(value));
            }
        }

        let mut ledger = self.load()?;
        let today = self.clock.today();
        let edit_policy = self.options.edit_policy;

        let Some(record) = ledger.find_mut(id) else {
            tracing::warn!(id, "edit requested for unknown record");
            return Ok(EditOutcome::NotFound { id });
        };

        let previous_amount = record.amount;
        if let Some(value) = amount {
            record.amount = value;
        }
        if let Some(text) = description.filter(|text| !text.is_empty()) {
            record.description = text.to_string();
        }
        record.modified = Some(today);
        let updated = record.clone();

        if let Some(value) = amount {
            let applied = match edit_policy {
                EditPolicy::Reapply => value,
                EditPolicy::Delta => value - previous_amount,
            };
            ledger.summary = recompute_summary(updated.category, applied, ledger.summary)
                .map_err(|_| WalletError::InvalidAmount(value))?;
        }

        self.storage.write(&ledger)?;
        tracing::info!(
            id,
            amount = updated.amount,
            balance = ledger.summary.balance,
            "edited record"
        );
        Ok(EditOutcome::Updated {
            record: updated,
            summary: ledger.summary,
        })
    }

    /// Start a fresh scan over the current records.
    ///
    /// The document is read once, here; the returned iterator never touches
    /// storage again.
    pub fn search_records(&self, filter: &SearchFilter) -> Result<SearchResults> {
        let ledger = self.load()?;
        Ok(SearchResults::new(ledger.records, filter.clone()))
    }

    /// Compare the stored totals against the records and look for
    /// malformed records.
    pub fn check_integrity(&self) -> Result<IntegrityReport> {
        let ledger = self.load()?;
        let mut issues = Vec::new();

        let computed = Summary::from_records(&ledger.records)?;
        if computed != ledger.summary {
            issues.push(IntegrityIssue::SummaryMismatch {
                stored: ledger.summary,
                computed,
            });
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for record in &ledger.records {
            if !seen.insert(record.id) && reported.insert(record.id) {
                issues.push(IntegrityIssue::DuplicateId(record.id));
            }
            if record.amount <= 0 {
                issues.push(IntegrityIssue::NonPositiveAmount {
                    id: record.id,
                    amount: record.amount,
                });
            }
        }

        for issue in &issues {
            tracing::warn!(%issue, "integrity problem");
        }
        Ok(IntegrityReport {
            records: ledger.records.len(),
            issues,
        })
    }

    /// Overwrite the stored totals with totals computed from the records.
    pub fn rebuild_summary(&mut self) -> Result<Summary> {
        let mut ledger = self.load()?;
        ledger.summary = Summary::from_records(&ledger.records)?;
        self.storage.write(&ledger)?;
        tracing::info!(balance = ledger.summary.balance, "rebuilt summary");
        Ok(ledger.summary)
    }
}
