use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vacancies", version)]
#[command(about = "Search hh.ru vacancies and rank them by salary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file holding saved vacancies (overrides config)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Directory containing config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive search on hh.ru (default)
    #[command(alias = "s")]
    Search,

    /// List saved vacancies
    #[command(alias = "ls")]
    Saved {
        /// Only vacancies whose title or description contains this
        #[arg(short, long)]
        keyword: Option<String>,

        /// Keep vacancies mentioning any of these words
        #[arg(short, long, num_args = 1..)]
        words: Vec<String>,

        /// Salary range, e.g. "100000 - 150000" or "100000"
        #[arg(short, long, default_value = "")]
        salary: String,

        /// Show at most this many vacancies
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Remove saved vacancies matching a keyword
    #[command(alias = "rm")]
    Remove {
        /// Case-insensitive keyword matched against title and description
        keyword: String,
    },
}
