use super::{materialize, VacancyFilter, VacancyStore};
use crate::error::Result;
use crate::model::{Vacancy, VacancyRecord};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<VacancyRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[VacancyRecord] {
        &self.records
    }
}

impl VacancyStore for InMemoryStore {
    fn add(&mut self, vacancy: &Vacancy) -> Result<()> {
        let record = vacancy.to_record();
        if !self.records.contains(&record) {
            self.records.push(record);
        }
        Ok(())
    }

    fn get(&self, filter: &VacancyFilter) -> Result<Vec<Vacancy>> {
        materialize(&self.records, filter)
    }

    fn delete(&mut self, vacancy: &Vacancy) -> Result<()> {
        let record = vacancy.to_record();
        self.records.retain(|r| *r != record);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_vacancy(mut self, title: &str, salary: Option<&str>, description: &str) -> Self {
            let link = format!("https://hh.ru/vacancy/{}", self.store.records.len() + 1);
            let vacancy = Vacancy::new(title, &link, salary, Some(description)).unwrap();
            self.store.add(&vacancy).unwrap();
            self
        }
    }
}
