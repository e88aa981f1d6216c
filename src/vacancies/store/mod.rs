//! # Storage Layer
//!
//! The [`VacancyStore`] trait is the storage abstraction. Commands only talk to
//! the trait, so tests can swap the JSON file for memory.
//!
//! ## Implementations
//!
//! - [`json::JsonFileStore`]: production storage
//!   - A single JSON array of `{title, link, salary, description}` objects
//!   - Whole file rewritten on every mutation
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!
//! ## Record Semantics
//!
//! Stores hold [`VacancyRecord`]s, not [`Vacancy`] values. There is no id:
//! two records are the same record when all four fields are equal. This is the
//! dedup key for `add` and the match rule for `delete`.
//!
//! Reading goes the other way: `get` rebuilds every matching record through
//! [`Vacancy::from_record`], so a hand-edited file with a broken link surfaces
//! as a validation error rather than a bad `Vacancy`.

use crate::error::Result;
use crate::model::{Vacancy, VacancyRecord};

pub mod json;
pub mod memory;

/// Criteria for [`VacancyStore::get`]. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyFilter {
    /// Case-insensitive substring of the title or the description.
    pub keyword: Option<String>,
}

impl VacancyFilter {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
        }
    }

    pub fn matches(&self, record: &VacancyRecord) -> bool {
        match self.keyword.as_deref() {
            None | Some("") => true,
            Some(keyword) => record.mentions(keyword),
        }
    }
}

/// Abstract interface for vacancy storage.
pub trait VacancyStore {
    /// Add a vacancy unless an identical record is already stored
    fn add(&mut self, vacancy: &Vacancy) -> Result<()>;

    /// Get stored vacancies matching the filter, in insertion order
    fn get(&self, filter: &VacancyFilter) -> Result<Vec<Vacancy>>;

    /// Delete every stored record equal to this vacancy's record
    fn delete(&mut self, vacancy: &Vacancy) -> Result<()>;
}

pub(crate) fn materialize(records: &[VacancyRecord], filter: &VacancyFilter) -> Result<Vec<Vacancy>> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .map(Vacancy::from_record)
        .collect()
}
