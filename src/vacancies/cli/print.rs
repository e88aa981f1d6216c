use colored::Colorize;
use vacancies::api::{CmdMessage, MessageLevel};
use vacancies::model::Vacancy;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_vacancies(vacancies: &[Vacancy]) {
    if vacancies.is_empty() {
        println!("Вакансий не найдено.");
        return;
    }

    for (i, vacancy) in vacancies.iter().enumerate() {
        let salary = if vacancy.has_salary() {
            vacancy.salary().green()
        } else {
            vacancy.salary().dimmed()
        };

        println!();
        println!("{}. Вакансия: {}", i + 1, vacancy.title().bold());
        println!("Ссылка: {}", vacancy.link().cyan());
        println!("Зарплата: {}", salary);
        println!("Описание: {}", vacancy.description());
    }
}
