//! Pure helpers for narrowing and ranking a list of vacancies.
//!
//! Every function takes a slice and returns a new `Vec`; nothing here touches
//! the store or the network.

use crate::error::{Result, VacancyError};
use crate::model::{Vacancy, SALARY_NOT_SPECIFIED};
use std::cmp::Reverse;
use std::str::FromStr;
use tracing::warn;

/// Keep vacancies whose title or description mentions any of `words`.
///
/// An empty word list keeps everything.
pub fn filter_by_keywords<W: AsRef<str>>(vacancies: &[Vacancy], words: &[W]) -> Vec<Vacancy> {
    if words.is_empty() {
        return vacancies.to_vec();
    }

    vacancies
        .iter()
        .filter(|v| words.iter().any(|w| v.mentions(w.as_ref())))
        .cloned()
        .collect()
}

/// Inclusive bounds on [`Vacancy::salary_in_minor_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl SalaryRange {
    pub fn contains(&self, salary: u64) -> bool {
        salary >= self.min && self.max.map_or(true, |max| salary <= max)
    }
}

impl FromStr for SalaryRange {
    type Err = VacancyError;

    /// Parses "100000 - 150000" or a single lower bound such as "100000".
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| *c != ' ').collect();
        let mut parts = compact.split('-');

        let min = parse_bound(parts.next().unwrap_or_default(), s)?;
        let max = match parts.next() {
            Some(raw) => Some(parse_bound(raw, s)?),
            None => None,
        };
        Ok(Self { min, max })
    }
}

fn parse_bound(raw: &str, input: &str) -> Result<u64> {
    raw.parse().map_err(|_| {
        VacancyError::Input(format!(
            "invalid salary range '{}', expected a format like 100000 - 150000",
            input
        ))
    })
}

/// Parse a user-supplied range. `None` means "do not filter": the input was
/// empty or names the unspecified-salary placeholder.
pub fn parse_salary_range(input: &str) -> Result<Option<SalaryRange>> {
    if input.trim().is_empty() || input.contains(SALARY_NOT_SPECIFIED) {
        return Ok(None);
    }
    input.parse().map(Some)
}

/// Keep vacancies whose salary floor falls inside `range`.
///
/// A range that does not parse is logged and ignored: the input comes back
/// unfiltered.
pub fn filter_by_salary(vacancies: &[Vacancy], range: &str) -> Vec<Vacancy> {
    match parse_salary_range(range) {
        Ok(Some(range)) => vacancies
            .iter()
            .filter(|v| range.contains(v.salary_in_minor_unit()))
            .cloned()
            .collect(),
        Ok(None) => vacancies.to_vec(),
        Err(err) => {
            warn!(error = %err, "ignoring salary range");
            vacancies.to_vec()
        }
    }
}

/// Highest salary first. Stable, so ties keep their original order.
pub fn sort_by_salary_desc(vacancies: &[Vacancy]) -> Vec<Vacancy> {
    let mut sorted = vacancies.to_vec();
    sorted.sort_by_cached_key(|v| Reverse(v.salary_in_minor_unit()));
    sorted
}

pub fn top_n(vacancies: &[Vacancy], n: usize) -> Vec<Vacancy> {
    vacancies.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(title: &str, salary: Option<&str>, description: &str) -> Vacancy {
        Vacancy::new(title, "https://hh.ru/vacancy/1", salary, Some(description)).unwrap()
    }

    fn titles(vacancies: &[Vacancy]) -> Vec<&str> {
        vacancies.iter().map(|v| v.title()).collect()
    }

    fn sample() -> Vec<Vacancy> {
        vec![
            vacancy("Python Developer", Some("100000 - 150000 RUR"), "Django"),
            vacancy("Rust Engineer", Some("200 000 руб."), "tokio, python scripts"),
            vacancy("Designer", None, "Figma"),
            vacancy("QA", Some("150000 RUR"), "manual testing"),
        ]
    }

    #[test]
    fn test_keyword_filter_matches_any_word() {
        let found = filter_by_keywords(&sample(), &["PYTHON", "figma"]);
        assert_eq!(titles(&found), vec!["Python Developer", "Rust Engineer", "Designer"]);
    }

    #[test]
    fn test_keyword_does_not_span_title_and_description() {
        let list = vec![vacancy("Python", Some("1"), "Developer")];
        assert!(filter_by_keywords(&list, &["python developer"]).is_empty());
        assert_eq!(filter_by_keywords(&list, &["developer"]).len(), 1);
    }

    #[test]
    fn test_empty_keyword_list_keeps_everything() {
        let none: [&str; 0] = [];
        assert_eq!(filter_by_keywords(&sample(), &none).len(), 4);
    }

    #[test]
    fn test_parses_ranges() {
        assert_eq!(
            "100000 - 150000".parse::<SalaryRange>().unwrap(),
            SalaryRange { min: 100000, max: Some(150000) }
        );
        assert_eq!(
            "90 000".parse::<SalaryRange>().unwrap(),
            SalaryRange { min: 90000, max: None }
        );
        assert!("abc".parse::<SalaryRange>().is_err());
        assert!("-5".parse::<SalaryRange>().is_err());
    }

    #[test]
    fn test_empty_or_placeholder_range_means_no_filter() {
        assert_eq!(parse_salary_range("").unwrap(), None);
        assert_eq!(parse_salary_range("Зарплата не указана").unwrap(), None);
    }

    #[test]
    fn test_salary_filter_is_inclusive() {
        let found = filter_by_salary(&sample(), "100000 - 150000");
        assert_eq!(titles(&found), vec!["Python Developer", "QA"]);
    }

    #[test]
    fn test_salary_filter_with_lower_bound_only() {
        let found = filter_by_salary(&sample(), "150000");
        assert_eq!(titles(&found), vec!["Rust Engineer", "QA"]);
    }

    #[test]
    fn test_malformed_salary_range_returns_input() {
        let found = filter_by_salary(&sample(), "много денег");
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_sorts_descending_and_keeps_tie_order() {
        let mut list = sample();
        list.push(vacancy("Second QA", Some("150 000"), "tie"));

        let sorted = sort_by_salary_desc(&list);
        assert_eq!(
            titles(&sorted),
            vec!["Rust Engineer", "QA", "Second QA", "Python Developer", "Designer"]
        );
    }

    #[test]
    fn test_sort_orders_spaced_and_saturated_salaries() {
        let list = vec![
            vacancy("Small", Some("90 000 руб."), "a"),
            vacancy("Huge", Some("99999999999999999999999 RUR"), "b"),
            vacancy("None", None, "c"),
            vacancy("Spaced", Some("1 200 000 руб."), "d"),
        ];

        let sorted = sort_by_salary_desc(&list);
        assert_eq!(titles(&sorted), vec!["Huge", "Spaced", "Small", "None"]);
    }

    #[test]
    fn test_top_n_truncates() {
        assert_eq!(top_n(&sample(), 2).len(), 2);
        assert_eq!(top_n(&sample(), 10).len(), 4);
        assert!(top_n(&sample(), 0).is_empty());
    }
}
