//! Record search with any-field matching.
//!
//! A record matches when **any** supplied criterion equals the record's
//! field. Absent criteria never match, so an empty filter matches nothing.

use std::fmt;
use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::storage::codec::to_pretty_json;
use crate::storage::{Category, Record};

/// Message yielded when a search finds nothing.
pub const NO_MATCHES_MESSAGE: &str = "No records match the given criteria";

/// Search criteria. Each present field is an alternative, not a constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub id: Option<u64>,
    pub created: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
    pub category: Option<Category>,
    pub amount: Option<i64>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn created(mut self, date: NaiveDate) -> Self {
        self.created = Some(date);
        self
    }

    pub fn modified(mut self, date: NaiveDate) -> Self {
        self.modified = Some(date);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any present criterion equals the record's field.
    pub fn matches(&self, record: &Record) -> bool {
        self.id == Some(record.id)
            || self.created == Some(record.created)
            || (self.modified.is_some() && self.modified == record.modified)
            || self.category == Some(record.category)
            || self.amount == Some(record.amount)
    }
}

/// One element of a search result sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    Record(Record),
    /// Emitted once, instead of an empty sequence, when nothing matched
    NoMatches,
}

impl SearchHit {
    pub fn record(&self) -> Option<&Record> {
        match self {
            SearchHit::Record(record) => Some(record),
            SearchHit::NoMatches => None,
        }
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchHit::Record(record) => {
                let json = to_pretty_json(record).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
            SearchHit::NoMatches => write!(f, "{}", NO_MATCHES_MESSAGE),
        }
    }
}

/// Lazy scan over a snapshot of the records taken when the search started.
#[derive(Debug)]
pub struct SearchResults {
    records: std::vec::IntoIter<Record>,
    filter: SearchFilter,
    matched: bool,
    finished: bool,
}

impl SearchResults {
    pub(crate) fn new(records: Vec<Record>, filter: SearchFilter) -> Self {
        Self {
            records: records.into_iter(),
            filter,
            matched: false,
            finished: false,
        }
    }
}

impl Iterator for SearchResults {
    type Item = SearchHit;

    fn next(&mut self) -> Option<SearchHit> {
        if self.finished {
            return None;
        }
        for record in self.records.by_ref() {
            if self.filter.matches(&record) {
                self.matched = true;
                return Some(SearchHit::Record(record));
            }
        }
        self.finished = true;
        if self.matched {
            None
        } else {
            Some(SearchHit::NoMatches)
        }
    }
}

impl FusedIterator for SearchResults {}
