//! # Vacancies Architecture
//!
//! Vacancies pulls job postings from hh.ru, normalizes them, keeps them in a
//! JSON file, and ranks them by salary. The console session is one client of
//! the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompts, argument parsing, coloured output, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + query.rs                   │
//! │  - search / saved / remove, filter-sort-top pipeline        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Source (hh.rs)           │ │  Storage (store/)             │
//! │  JobApi, HeadHunterApi    │ │  VacancyStore, JsonFileStore  │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! - Building a [`model::Vacancy`] fails loudly on a blank title or a link
//!   without `http://`/`https://`. Casting a batch stops at the first bad item.
//! - The hh.ru client never fails: problems are logged and become an empty list.
//! - A vacancy file that does not hold a JSON array loads as an empty store.
//! - A salary range that does not parse is logged and skipped.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`model`]: `Vacancy`, its record form, salary ordering, source casting
//! - [`query`]: Keyword/salary filters, sort, top-N
//! - [`store`]: Storage abstraction and implementations
//! - [`hh`]: hh.ru REST client
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod hh;
pub mod model;
pub mod query;
pub mod store;
