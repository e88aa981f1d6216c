use crate::model::Vacancy;
use crate::query;

pub mod remove;
pub mod saved;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Vacancy>,
    pub affected: Vec<Vacancy>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, vacancies: Vec<Vacancy>) -> Self {
        self.listed = vacancies;
        self
    }
}

/// How a list of vacancies is narrowed and ranked before display.
///
/// Steps run in a fixed order: keyword filter, salary filter, sort by salary
/// descending, truncate to `top_n`.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Keep vacancies mentioning any of these words; empty keeps all
    pub words: Vec<String>,
    /// "min - max", a single lower bound, or empty for no filter
    pub salary_range: String,
    /// `None` shows every match
    pub top_n: Option<usize>,
}

impl QueryOptions {
    pub fn apply(&self, vacancies: &[Vacancy]) -> Vec<Vacancy> {
        let filtered = query::filter_by_keywords(vacancies, &self.words);
        let ranged = query::filter_by_salary(&filtered, &self.salary_range);
        let sorted = query::sort_by_salary_desc(&ranged);
        match self.top_n {
            Some(n) => query::top_n(&sorted, n),
            None => sorted,
        }
    }
}
