use super::{materialize, VacancyFilter, VacancyStore};
use crate::error::Result;
use crate::model::{Vacancy, VacancyRecord};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EMPTY_ARRAY: &str = "[]";
const INDENT: &[u8] = b"    ";

/// Vacancy storage backed by a single JSON array on disk.
///
/// The whole array is held in memory and rewritten after every `add` or
/// `delete`. Nothing guards against a second process writing the same file.
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<VacancyRecord>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file (and its parent directory)
    /// with an empty array when it does not exist yet.
    ///
    /// Content that is not a JSON array loads as an empty store. Array
    /// entries missing one of the record fields are skipped, the rest load.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&path, EMPTY_ARRAY)?;
            debug!(path = %path.display(), "created empty vacancy file");
        }

        let records = load_records(&path);
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.records.serialize(&mut serializer)?;
        fs::write(&self.path, buf)?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved vacancies");
        Ok(())
    }
}

fn load_records(path: &Path) -> Vec<VacancyRecord> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read vacancy file, starting empty");
            return Vec::new();
        }
    };

    let items: Vec<Value> = match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "vacancy file is not a list of vacancies, starting empty");
            return Vec::new();
        }
    };

    let total = items.len();
    let records: Vec<VacancyRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if records.len() < total {
        warn!(
            path = %path.display(),
            skipped = total - records.len(),
            "skipped stored entries that are not complete vacancy records"
        );
    }
    records
}

impl VacancyStore for JsonFileStore {
    fn add(&mut self, vacancy: &Vacancy) -> Result<()> {
        let record = vacancy.to_record();
        if self.records.contains(&record) {
            return Ok(());
        }
        self.records.push(record);
        self.save()
    }

    fn get(&self, filter: &VacancyFilter) -> Result<Vec<Vacancy>> {
        materialize(&self.records, filter)
    }

    fn delete(&mut self, vacancy: &Vacancy) -> Result<()> {
        let record = vacancy.to_record();
        self.records.retain(|r| *r != record);
        self.save()
    }
}
