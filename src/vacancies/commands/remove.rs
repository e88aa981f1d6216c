use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VacancyError};
use crate::store::{VacancyFilter, VacancyStore};

/// Delete every stored vacancy whose title or description mentions `keyword`.
pub fn run<S: VacancyStore>(store: &mut S, keyword: &str) -> Result<CmdResult> {
    if keyword.trim().is_empty() {
        return Err(VacancyError::Input(
            "a keyword is required to remove vacancies".to_string(),
        ));
    }

    let matching = store.get(&VacancyFilter::keyword(keyword))?;
    let mut result = CmdResult::default();

    for vacancy in &matching {
        store.delete(vacancy)?;
        result.add_message(CmdMessage::success(format!(
            "Вакансия удалена: {}",
            vacancy.title()
        )));
    }

    if matching.is_empty() {
        result.add_message(CmdMessage::warning("Вакансий не найдено."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Удалено вакансий: {}",
            matching.len()
        )));
    }

    result.affected = matching;
    Ok(result)
}
