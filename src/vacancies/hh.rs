//! # hh.ru Client
//!
//! [`JobApi`] is the seam between the app and a job board. [`HeadHunterApi`]
//! is the only implementation: one blocking GET per search, no paging, no
//! retries.
//!
//! Failures never reach the caller. A connection error, a timeout, a non-200
//! status or an unreadable body is logged and turned into an empty list, so
//! callers only have to handle "nothing found".

use crate::config::AppConfig;
use crate::error::{Result, VacancyError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// hh.ru rejects pages larger than this.
pub const MAX_PER_PAGE: usize = 100;

/// Source of raw vacancy items.
pub trait JobApi {
    /// Fetch one page of raw vacancy items for `query`; empty on any failure
    fn get_vacancies(&self, query: &str, per_page: usize) -> Vec<Value>;
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    items: Vec<Value>,
}

pub struct HeadHunterApi {
    client: Client,
    vacancies_url: String,
    area: u32,
}

impl HeadHunterApi {
    pub fn new(base_url: &str, area: u32, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| VacancyError::Config(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            vacancies_url: format!("{}/vacancies", base_url.trim_end_matches('/')),
            area,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            config.area,
            config.request_timeout(),
            &config.user_agent,
        )
    }

    pub fn vacancies_url(&self) -> &str {
        &self.vacancies_url
    }
}

impl JobApi for HeadHunterApi {
    fn get_vacancies(&self, query: &str, per_page: usize) -> Vec<Value> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        debug!(url = %self.vacancies_url, query, per_page, "fetching vacancies");

        let response = match self
            .client
            .get(&self.vacancies_url)
            .query(&[
                ("text", query.to_string()),
                ("area", self.area.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "could not connect to hh.ru");
                return Vec::new();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "hh.ru request failed");
            return Vec::new();
        }

        match response.json::<VacanciesPage>() {
            Ok(page) => {
                debug!(count = page.items.len(), "received vacancies");
                page.items
            }
            Err(err) => {
                warn!(error = %err, "hh.ru returned an unreadable body");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_vacancies_url_from_base() {
        let api = HeadHunterApi::new("https://api.hh.ru/", 113, Duration::from_secs(1), "t").unwrap();
        assert_eq!(api.vacancies_url(), "https://api.hh.ru/vacancies");
    }

    #[test]
    fn test_unreachable_host_yields_empty_list() {
        // Port 9 (discard) on loopback is closed on any sane test machine.
        let api = HeadHunterApi::new("http://127.0.0.1:9", 113, Duration::from_secs(2), "t").unwrap();
        assert!(api.get_vacancies("python", 10).is_empty());
    }
}
