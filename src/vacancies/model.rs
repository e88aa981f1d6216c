use crate::error::{Result, VacancyError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

pub const SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";
pub const DESCRIPTION_NOT_SPECIFIED: &str = "Описание не указано";
/// Description used when a source record carries no snippet requirement at all.
pub const NO_DESCRIPTION: &str = "Нет описания";
pub const DEFAULT_LINK: &str = "https://hh.ru";

const LINK_SCHEMES: [&str; 2] = ["http://", "https://"];

// Compared against the trimmed, lowercased input.
const UNSPECIFIED_SALARIES: [&str; 4] = ["", "не указано", "з/п не указана", "зарплата не указана"];

/// The persisted form of a vacancy: four plain strings, compared field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    pub link: String,
    pub salary: String,
    pub description: String,
}

impl VacancyRecord {
    pub fn mentions(&self, keyword: &str) -> bool {
        mentions(&self.title, &self.description, keyword)
    }
}

fn mentions(title: &str, description: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    title.to_lowercase().contains(&keyword) || description.to_lowercase().contains(&keyword)
}

/// A validated, normalized job posting.
///
/// Fields are private so a `Vacancy` can only come out of [`Vacancy::new`] (or
/// one of the helpers built on it) and never changes afterwards. `PartialEq`
/// compares all four fields; salary ordering lives in [`compare_by_salary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    title: String,
    link: String,
    salary: String,
    description: String,
}

impl Vacancy {
    pub fn new(
        title: &str,
        link: &str,
        salary: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            title: validate_title(title)?,
            link: validate_link(link)?,
            salary: normalize_salary(salary),
            description: normalize_description(description),
        })
    }

    pub fn from_record(record: &VacancyRecord) -> Result<Self> {
        Self::new(
            &record.title,
            &record.link,
            Some(&record.salary),
            Some(&record.description),
        )
    }

    pub fn to_record(&self) -> VacancyRecord {
        VacancyRecord {
            title: self.title.clone(),
            link: self.link.clone(),
            salary: self.salary.clone(),
            description: self.description.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_salary(&self) -> bool {
        self.salary != SALARY_NOT_SPECIFIED
    }

    /// The lower bound of the salary as an integer.
    ///
    /// Whitespace is dropped first so "100 000 - 150 000 руб." reads as 100000.
    /// Returns 0 when the salary is unspecified or has no digits.
    pub fn salary_in_minor_unit(&self) -> u64 {
        if !self.has_salary() {
            return 0;
        }

        self.salary
            .chars()
            .filter(|c| !c.is_whitespace())
            .skip_while(|c| !c.is_ascii_digit())
            .map_while(|c| c.to_digit(10))
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
    }

    /// Whether the keyword occurs in the title or the description, ignoring case.
    pub fn mentions(&self, keyword: &str) -> bool {
        mentions(&self.title, &self.description, keyword)
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Вакансия: {}", self.title)?;
        writeln!(f, "Ссылка: {}", self.link)?;
        writeln!(f, "Зарплата: {}", self.salary)?;
        write!(f, "Описание: {}", self.description)
    }
}

/// Orders two vacancies by [`Vacancy::salary_in_minor_unit`] only.
///
/// Vacancies with different titles or links compare `Equal` when their salary
/// floors match.
pub fn compare_by_salary(a: &Vacancy, b: &Vacancy) -> Ordering {
    a.salary_in_minor_unit().cmp(&b.salary_in_minor_unit())
}

/// Casts raw hh.ru vacancy items into [`Vacancy`] values.
///
/// The first item that is missing `name` or fails validation aborts the whole
/// batch with that error.
pub fn cast_list(raw: &[Value]) -> Result<Vec<Vacancy>> {
    raw.iter().map(cast_item).collect()
}

fn cast_item(item: &Value) -> Result<Vacancy> {
    let title = item
        .get("name")
        .and_then(Value::as_str)
        .ok_or(VacancyError::MissingField("name"))?;

    let link = item
        .get("alternate_url")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LINK);

    let salary = item.get("salary").and_then(format_salary);

    let description = match item.get("snippet").and_then(|s| s.get("requirement")) {
        Some(requirement) => requirement.as_str(),
        None => Some(NO_DESCRIPTION),
    };

    Vacancy::new(title, link, salary.as_deref(), description)
}

fn format_salary(salary: &Value) -> Option<String> {
    let from = salary.get("from").filter(|v| is_present(v))?;
    let currency = salary
        .get("currency")
        .and_then(Value::as_str)
        .unwrap_or("");

    let formatted = match salary.get("to").filter(|v| is_present(v)) {
        Some(to) => format!("{} - {} {}", bound(from), bound(to), currency),
        None => format!("{} {}", bound(from), currency),
    };
    Some(formatted)
}

fn bound(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Zero, null and empty values count as absent salary bounds.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(VacancyError::Validation(
            "empty title: vacancy title cannot be blank".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_link(link: &str) -> Result<String> {
    if !LINK_SCHEMES.iter().any(|scheme| link.starts_with(scheme)) {
        return Err(VacancyError::Validation(format!(
            "invalid link: '{}' must start with http:// or https://",
            link
        )));
    }
    Ok(link.to_string())
}

fn normalize_salary(salary: Option<&str>) -> String {
    match salary.map(str::trim) {
        Some(s) if !UNSPECIFIED_SALARIES.contains(&s.to_lowercase().as_str()) => s.to_string(),
        _ => SALARY_NOT_SPECIFIED.to_string(),
    }
}

fn normalize_description(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => DESCRIPTION_NOT_SPECIFIED.to_string(),
    }
}
