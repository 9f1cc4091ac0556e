//! Interactive wallet session.
//!
//! The session reads lines from any `BufRead` and writes prompts and results
//! to any `Write`, so the binary runs it over stdin/stdout and the tests run
//! it over in-memory buffers. Menu actions and search criteria are matched by
//! keyword roots in English and Russian.

use std::io::{self, BufRead, Write};

use wallet_core::storage::Category;
use wallet_core::{DocumentStore, LedgerStore, SearchFilter, WalletError};

use crate::helpers::{parse_amount, parse_category, parse_date_arg, parse_edit_input, parse_id};

const WELCOME: &str = "Welcome to your personal wallet. It helps you keep track of your money.";
const MENU: &str = "\nWhat would you like to do:\n\
> Balance\n\
> Add an income or expense record\n\
> Edit a record by id\n\
> Search records\n\
> Exit\n";
const INVALID_INPUT: &str = "Invalid input. Try again";

/// A top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Add,
    Edit,
    Search,
    Exit,
}

impl Action {
    const ROOTS: [(Action, &'static [&'static str]); 5] = [
        (Action::Balance, &["balance", "вывод", "баланс"]),
        (
            Action::Add,
            &["add", "income", "expense", "добав", "доход", "расход"],
        ),
        (Action::Edit, &["edit", "редакт", "измен"]),
        (Action::Search, &["search", "find", "поиск", "искать"]),
        (Action::Exit, &["exit", "quit", "выйти"]),
    ];

    /// Action whose keyword root occurs earliest in the input, so the verb
    /// wins over a category named after it ("edit expense").
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }
        Self::ROOTS
            .iter()
            .filter_map(|(action, roots)| {
                roots
                    .iter()
                    .filter_map(|root| input.find(root))
                    .min()
                    .map(|position| (position, *action))
            })
            .min_by_key(|(position, _)| *position)
            .map(|(_, action)| action)
    }
}

/// A search criterion chosen in the search flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Created,
    Modified,
    Category,
    Amount,
    Id,
}

impl Criterion {
    // "id" is checked last: it is the shortest root.
    const ROOTS: [(Criterion, &'static [&'static str]); 5] = [
        (Criterion::Created, &["created", "added", "добав"]),
        (Criterion::Modified, &["modified", "changed", "edited", "измен"]),
        (Criterion::Category, &["category", "категор"]),
        (Criterion::Amount, &["amount", "сумм"]),
        (Criterion::Id, &["id", "номер"]),
    ];

    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }
        Self::ROOTS
            .iter()
            .find(|(_, roots)| roots.iter().any(|root| input.contains(root)))
            .map(|(criterion, _)| *criterion)
    }
}

enum Step {
    Continue,
    /// Input ran out; the session ends as if the user chose exit.
    Eof,
}

pub struct Session<S: DocumentStore, R: BufRead, W: Write> {
    store: LedgerStore<S>,
    input: R,
    output: W,
}

impl<S: DocumentStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(store: LedgerStore<S>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (LedgerStore<S>, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until exit or end of input.
    ///
    /// Ledger errors are reported to the user and the loop goes on; only
    /// failures to read input or write output end the session early.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.say(WELCOME)?;
        loop {
            self.say(MENU)?;
            let Some(line) = self.prompt("Enter an action:")? else {
                break;
            };

            let step = match Action::from_input(&line) {
                Some(Action::Balance) => self.balance(),
                Some(Action::Add) => self.add(),
                Some(Action::Edit) => self.edit(),
                Some(Action::Search) => self.search(),
                Some(Action::Exit) => break,
                None => {
                    self.say(INVALID_INPUT)?;
                    Ok(Step::Continue)
                }
            };

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Eof) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "shell action failed");
                    self.say(&format!("Error: {}", err))?;
                }
            }
        }
        self.farewell()
    }

    fn farewell(&mut self) -> anyhow::Result<()> {
        self.say("At the end of the session you have:\n")?;
        match self.store.show_summary() {
            Ok(summary) => self.say(&summary)?,
            Err(err) => self.say(&format!("Error: {}", err))?,
        }
        Ok(())
    }

    fn balance(&mut self) -> anyhow::Result<Step> {
        let summary = self.store.show_summary()?;
        self.say(&summary)?;
        Ok(Step::Continue)
    }

    fn add(&mut self) -> anyhow::Result<Step> {
        loop {
            let Some(category) =
                self.ask("Enter the operation type (income/expense):", parse_category)?
            else {
                return Ok(Step::Eof);
            };
            let Some(amount) = self.ask("Enter the amount:", parse_amount)? else {
                return Ok(Step::Eof);
            };
            let Some(description) = self.prompt("Enter a description:")? else {
                return Ok(Step::Eof);
            };

            match self.store.add_record(category, amount, description.trim()) {
                Ok(outcome) => {
                    self.say(&outcome.to_string())?;
                    return Ok(Step::Continue);
                }
                Err(err) if err.is_input_error() => self.retry(&err)?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn edit(&mut self) -> anyhow::Result<Step> {
        let count = self.store.record_count()?;
        if count == 0 {
            self.say("Your wallet has no records yet. Add one first")?;
            return Ok(Step::Continue);
        }
        self.say(&format!("Your wallet has {} record(s)", count))?;

        let Some(id) = self.ask("Enter the record id:", parse_id)? else {
            return Ok(Step::Eof);
        };
        self.say("You can change the amount and/or the description")?;
        let Some(line) = self.prompt("Enter them separated by a space:")? else {
            return Ok(Step::Eof);
        };

        let change = parse_edit_input(&line);
        match self
            .store
            .edit_record(id, change.amount, change.description.as_deref())
        {
            Ok(outcome) => self.say(&outcome.to_string())?,
            Err(err) if err.is_input_error() => self.retry(&err)?,
            Err(err) => return Err(err.into()),
        }
        Ok(Step::Continue)
    }

    fn search(&mut self) -> anyhow::Result<Step> {
        self.say("You can search records by one criterion:\n> id/created/modified/category/amount")?;
        let Some(criterion) = self.ask("Enter a search criterion:", |line| {
            Criterion::from_input(line).ok_or_else(|| anyhow::anyhow!("Unknown criterion"))
        })?
        else {
            return Ok(Step::Eof);
        };

        let filter = match criterion {
            Criterion::Id => self
                .ask("Enter the record id:", parse_id)?
                .map(|id| SearchFilter::new().id(id)),
            Criterion::Created => self
                .ask("Enter the date the records were added (YYYY-MM-DD):", parse_date_arg)?
                .map(|date| SearchFilter::new().created(date)),
            Criterion::Modified => self
                .ask("Enter the date the records were edited (YYYY-MM-DD):", parse_date_arg)?
                .map(|date| SearchFilter::new().modified(date)),
            Criterion::Category => self
                .ask("Enter the category (income/expense):", parse_category)?
                .map(|category: Category| SearchFilter::new().category(category)),
            Criterion::Amount => self
                .ask("Enter the amount:", parse_amount)?
                .map(|amount| SearchFilter::new().amount(amount)),
        };
        let Some(filter) = filter else {
            return Ok(Step::Eof);
        };

        for hit in self.store.search_records(&filter)? {
            self.say(&hit.to_string())?;
        }
        Ok(Step::Continue)
    }

    fn retry(&mut self, err: &WalletError) -> io::Result<()> {
        self.say(&format!("{}. Try again", err))
    }

    /// Prompt until `parse` accepts the line. `None` on end of input.
    fn ask<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> anyhow::Result<T>,
    ) -> anyhow::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(&format!("{}. {}", err, INVALID_INPUT))?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}\n> ", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use chrono::NaiveDate;
    use wallet_core::storage::MemoryStorage;
    use wallet_core::{FixedClock, NO_MATCHES_MESSAGE};

    const SAMPLE: &str = r#"{"wallet_data": [
        {"доход": 18500, "расход": 3900, "итог": 14600},
        {"номер": 1, "дата добавления": "2024-05-05", "дата изменения": "", "категория": "доход", "сумма": 6500, "описание": ""},
        {"номер": 2, "дата добавления": "2024-05-05", "дата изменения": "", "категория": "доход", "сумма": 12000, "описание": ""},
        {"номер": 3, "дата добавления": "2024-05-05", "дата изменения": "", "категория": "расход", "сумма": 1200, "описание": ""},
        {"номер": 4, "дата добавления": "2024-05-05", "дата изменения": "", "категория": "расход", "сумма": 2100, "описание": ""},
        {"номер": 5, "дата добавления": "2024-05-05", "дата изменения": "2024-05-05", "категория": "расход", "сумма": 600, "описание": "памперс"}
    ]}"#;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn run_with(store: LedgerStore<MemoryStorage>, input: &str) -> (LedgerStore<MemoryStorage>, String) {
        let mut session = Session::new(store, Cursor::new(input.to_string()), Vec::new());
        session.run().unwrap();
        let (store, output) = session.into_inner();
        (store, String::from_utf8(output).unwrap())
    }

    fn run_sample(input: &str) -> (LedgerStore<MemoryStorage>, String) {
        let store = LedgerStore::new(MemoryStorage::with_document(SAMPLE)).with_clock(clock());
        run_with(store, input)
    }

    #[test]
    fn test_action_keywords() {
        assert_eq!(Action::from_input("Вывод баланса"), Some(Action::Balance));
        assert_eq!(Action::from_input("balance"), Some(Action::Balance));
        assert_eq!(Action::from_input("Добавление записи"), Some(Action::Add));
        assert_eq!(Action::from_input("expense"), Some(Action::Add));
        assert_eq!(Action::from_input("Редактирование"), Some(Action::Edit));
        assert_eq!(Action::from_input("find"), Some(Action::Search));
        assert_eq!(Action::from_input("Поиск по записям"), Some(Action::Search));
        assert_eq!(Action::from_input("ВЫЙТИ"), Some(Action::Exit));
        assert_eq!(Action::from_input("dance"), None);
        assert_eq!(Action::from_input("редактировать расход"), Some(Action::Edit));
        assert_eq!(Action::from_input("edit income"), Some(Action::Edit));
        assert_eq!(Action::from_input("search expense"), Some(Action::Search));
        assert_eq!(Action::from_input(""), None);
    }

    #[test]
    fn test_criterion_keywords() {
        assert_eq!(Criterion::from_input("номер"), Some(Criterion::Id));
        assert_eq!(Criterion::from_input("id"), Some(Criterion::Id));
        assert_eq!(Criterion::from_input("дата добавления"), Some(Criterion::Created));
        assert_eq!(Criterion::from_input("дата изменения"), Some(Criterion::Modified));
        assert_eq!(Criterion::from_input("modified"), Some(Criterion::Modified));
        assert_eq!(Criterion::from_input("Категория"), Some(Criterion::Category));
        assert_eq!(Criterion::from_input("сумма"), Some(Criterion::Amount));
        assert_eq!(Criterion::from_input("colour"), None);
    }

    #[test]
    fn test_balance_then_exit() {
        let (_, output) = run_sample("balance\nexit\n");
        assert!(output.starts_with(WELCOME));
        let summary = "Income: 18500\nExpense: 3900\nBalance: 14600";
        assert_eq!(output.matches(summary).count(), 2);
        assert!(output.contains("At the end of the session you have:"));
    }

    #[test]
    fn test_unknown_action_reprompts() {
        let (_, output) = run_sample("dance\nexit\n");
        assert!(output.contains(INVALID_INPUT));
        assert_eq!(output.matches("Enter an action:").count(), 2);
    }

    #[test]
    fn test_add_reprompts_on_bad_category_and_amount() {
        let (store, output) = run_sample("добавить\nsalary\nincome\nмного\n2000\nbonus\nexit\n");
        assert!(output.contains("Invalid category: \"salary\""));
        assert!(output.contains("Amount must be a whole number: много"));
        assert!(output.contains("Income added successfully\nBalance: 16600"));

        let ledger = store.load().unwrap();
        assert_eq!(ledger.records.len(), 6);
        assert_eq!(ledger.records[5].description, "bonus");
    }

    #[test]
    fn test_add_overdraft_restarts_flow() {
        let (store, output) =
            run_sample("add\nexpense\n20000\nrent\nexpense\n100\ncoffee\nexit\n");
        assert!(output.contains("Balance cannot go below zero"));
        assert!(output.contains("Expense added successfully\nBalance: 14500"));
        assert_eq!(store.record_count().unwrap(), 6);
    }

    #[test]
    fn test_add_zero_amount_restarts_flow() {
        let (store, output) = run_sample("add\nincome\n0\nnothing\nincome\n10\ntip\nexit\n");
        assert!(output.contains("Invalid amount: 0"));
        assert_eq!(store.summary().unwrap().income, 18510);
    }

    #[test]
    fn test_edit_empty_wallet() {
        let mut store = LedgerStore::new(MemoryStorage::new()).with_clock(clock());
        store.init(false).unwrap();
        let (_, output) = run_with(store, "edit\nexit\n");
        assert!(output.contains("Your wallet has no records yet. Add one first"));
        assert!(!output.contains("Enter the record id:"));
    }

    #[test]
    fn test_edit_amount_and_description() {
        let (store, output) = run_sample("редактировать\n5\n700 diapers\nexit\n");
        assert!(output.contains("Your wallet has 5 record(s)"));
        assert!(output.contains("Record 5 updated successfully"));
        assert!(output.contains("\"сумма\": 700"));
        assert!(output.contains("\"дата изменения\": \"2024-06-01\""));

        let summary = store.summary().unwrap();
        assert_eq!(summary.expense, 4600);
        assert_eq!(summary.balance, 13900);
    }

    #[test]
    fn test_edit_description_only_keeps_totals() {
        let (store, _) = run_sample("edit\n1\nfirst salary\nexit\n");
        let ledger = store.load().unwrap();
        assert_eq!(ledger.records[0].description, "first salary");
        assert_eq!(ledger.records[0].amount, 6500);
        assert_eq!(ledger.summary.balance, 14600);
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_, output) = run_sample("edit\n42\n100\nexit\n");
        assert!(output.contains("No record with id 42 exists. Try again"));
    }

    #[test]
    fn test_edit_bad_id_reprompts() {
        let (_, output) = run_sample("edit\nfive\n5\n650\nexit\n");
        assert!(output.contains("Record id must be a positive whole number: five"));
        assert!(output.contains("Record 5 updated successfully"));
    }

    #[test]
    fn test_search_by_category() {
        let (_, output) = run_sample("поиск\nкатегория\nрасход\nexit\n");
        assert_eq!(output.matches("\"категория\": \"расход\"").count(), 3);
        assert!(!output.contains("\"категория\": \"доход\""));
    }

    #[test]
    fn test_search_by_modified_date() {
        let (_, output) = run_sample("search\nmodified\n2024-05-05\nexit\n");
        assert_eq!(output.matches("\"номер\":").count(), 1);
        assert!(output.contains("\"описание\": \"памперс\""));
    }

    #[test]
    fn test_search_without_matches() {
        let (_, output) = run_sample("search\namount\n999\nexit\n");
        assert!(output.contains(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_search_unknown_criterion_reprompts() {
        let (_, output) = run_sample("search\ncolour\nid\n2\nexit\n");
        assert!(output.contains("Unknown criterion"));
        assert!(output.contains("\"сумма\": 12000"));
    }

    #[test]
    fn test_eof_ends_like_exit() {
        let (_, output) = run_sample("balance\n");
        assert!(output.trim_end().ends_with("Balance: 14600"));
        assert!(output.contains("At the end of the session you have:"));
    }

    #[test]
    fn test_eof_inside_add_writes_nothing() {
        let (store, output) = run_sample("add\nincome\n");
        assert!(output.contains("At the end of the session you have:"));
        assert_eq!(store.record_count().unwrap(), 5);
    }

    #[test]
    fn test_storage_errors_do_not_end_session() {
        let store = LedgerStore::new(MemoryStorage::new()).with_clock(clock());
        let (_, output) = run_with(store, "balance\nexit\n");
        assert!(output.contains("Error: Wallet data unavailable"));
        assert_eq!(output.matches("Enter an action:").count(), 2);
    }
}
