use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing field in source record: {0}")]
    MissingField(&'static str),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VacancyError>;
