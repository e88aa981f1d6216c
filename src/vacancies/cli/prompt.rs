use std::io::{BufRead, Write};
use vacancies::api::QueryOptions;
use vacancies::error::{Result, VacancyError};

/// Answers collected by the interactive search session.
#[derive(Debug)]
pub(crate) struct SearchSession {
    pub query: String,
    pub top_n: usize,
    pub options: QueryOptions,
}

pub(crate) fn read_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SearchSession> {
    let query = ask(input, output, "Введите поисковый запрос: ")?;

    let top_raw = ask(input, output, "Введите количество вакансий для вывода в топ N: ")?;
    let top_n: usize = top_raw.trim().parse().map_err(|_| {
        VacancyError::Input(format!("'{}' is not a valid vacancy count", top_raw.trim()))
    })?;

    let words = ask(input, output, "Введите ключевые слова для фильтрации вакансий: ")?
        .split_whitespace()
        .map(String::from)
        .collect();

    let salary_range = ask(
        input,
        output,
        "Введите диапазон зарплат (например, 100000 - 150000): ",
    )?;

    Ok(SearchSession {
        query,
        top_n,
        options: QueryOptions {
            words,
            salary_range,
            top_n: Some(top_n),
        },
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
