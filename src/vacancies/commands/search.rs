use crate::commands::{CmdMessage, CmdResult, QueryOptions};
use crate::error::Result;
use crate::hh::{JobApi, MAX_PER_PAGE};
use crate::model::cast_list;
use crate::store::VacancyStore;
use tracing::info;

/// Fetch vacancies for `query`, save all of them, then rank them with `options`.
///
/// Twice `top_n` items are requested so the filters have something to cut.
/// A single malformed source item aborts the command before anything is saved.
pub fn run<S: VacancyStore, A: JobApi>(
    store: &mut S,
    api: &A,
    query: &str,
    options: &QueryOptions,
) -> Result<CmdResult> {
    let per_page = options
        .top_n
        .map_or(MAX_PER_PAGE, |n| n.saturating_mul(2));
    let raw = api.get_vacancies(query, per_page);

    let mut result = CmdResult::default();
    if raw.is_empty() {
        result.add_message(CmdMessage::error(
            "Не удалось получить вакансии. Проверьте подключение или запрос.",
        ));
        return Ok(result);
    }

    let vacancies = cast_list(&raw)?;
    for vacancy in &vacancies {
        store.add(vacancy)?;
    }
    info!(query, count = vacancies.len(), "saved fetched vacancies");
    result.add_message(CmdMessage::info(format!(
        "Получено вакансий с HH.ru: {}",
        vacancies.len()
    )));

    result.listed = options.apply(&vacancies);
    result.affected = vacancies;
    Ok(result)
}
