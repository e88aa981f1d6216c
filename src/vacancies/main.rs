use clap::Parser;
use directories::ProjectDirs;
use std::io;
use tracing_subscriber::EnvFilter;
use vacancies::api::{QueryOptions, VacanciesApi};
use vacancies::config::AppConfig;
use vacancies::error::Result;
use vacancies::hh::HeadHunterApi;
use vacancies::store::json::JsonFileStore;
use vacancies::store::VacancyFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{print_messages, print_vacancies};
use cli::prompt::read_session;

type App = VacanciesApi<JsonFileStore, HeadHunterApi>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let data_file = cli.data_file.unwrap_or_else(|| config.data_file.clone());

    let store = JsonFileStore::open(&data_file)?;
    let source = HeadHunterApi::from_config(&config)?;
    let mut api = VacanciesApi::new(store, source);

    match cli.command {
        None | Some(Commands::Search) => handle_search(&mut api),
        Some(Commands::Saved {
            keyword,
            words,
            salary,
            top,
        }) => handle_saved(&api, keyword, words, salary, top),
        Some(Commands::Remove { keyword }) => handle_remove(&mut api, &keyword),
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("ru", "vacancies", "vacancies").map(|dirs| dirs.config_dir().to_path_buf())
    });

    match config_dir {
        Some(dir) => AppConfig::load(dir),
        None => Ok(AppConfig::default()),
    }
}

fn handle_search(api: &mut App) -> Result<()> {
    let session = read_session(&mut io::stdin().lock(), &mut io::stdout())?;

    println!("\nПолучаем вакансии с HH.ru...");
    let result = api.search(&session.query, &session.options)?;
    print_messages(&result.messages);

    if result.affected.is_empty() {
        return Ok(());
    }

    println!("\nТоп {} вакансий по зарплате:", session.top_n);
    print_vacancies(&result.listed);
    Ok(())
}

fn handle_saved(
    api: &App,
    keyword: Option<String>,
    words: Vec<String>,
    salary_range: String,
    top_n: Option<usize>,
) -> Result<()> {
    let filter = VacancyFilter { keyword };
    let options = QueryOptions {
        words,
        salary_range,
        top_n,
    };

    let result = api.saved(&filter, &options)?;
    print_messages(&result.messages);
    print_vacancies(&result.listed);
    Ok(())
}

fn handle_remove(api: &mut App, keyword: &str) -> Result<()> {
    let result = api.remove(keyword)?;
    print_messages(&result.messages);
    Ok(())
}
