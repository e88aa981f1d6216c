use crate::commands::{CmdResult, QueryOptions};
use crate::error::Result;
use crate::store::{VacancyFilter, VacancyStore};

/// Rank stored vacancies matching `filter` with `options`.
pub fn run<S: VacancyStore>(
    store: &S,
    filter: &VacancyFilter,
    options: &QueryOptions,
) -> Result<CmdResult> {
    let stored = store.get(filter)?;
    Ok(CmdResult::default().with_listed(options.apply(&stored)))
}
