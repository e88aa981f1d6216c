//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints.
//!
//! `VacanciesApi<S, A>` is generic over both seams:
//! - Production: `VacanciesApi<JsonFileStore, HeadHunterApi>`
//! - Testing: `VacanciesApi<InMemoryStore, _>` with a canned [`JobApi`]

use crate::commands;
use crate::error::Result;
use crate::hh::JobApi;
use crate::store::{VacancyFilter, VacancyStore};

pub struct VacanciesApi<S: VacancyStore, A: JobApi> {
    store: S,
    source: A,
}

impl<S: VacancyStore, A: JobApi> VacanciesApi<S, A> {
    pub fn new(store: S, source: A) -> Self {
        Self { store, source }
    }

    pub fn search(&mut self, query: &str, options: &QueryOptions) -> Result<CmdResult> {
        commands::search::run(&mut self.store, &self.source, query, options)
    }

    pub fn saved(&self, filter: &VacancyFilter, options: &QueryOptions) -> Result<CmdResult> {
        commands::saved::run(&self.store, filter, options)
    }

    pub fn remove(&mut self, keyword: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, keyword)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, QueryOptions};
