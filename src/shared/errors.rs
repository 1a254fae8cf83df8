use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Invalid repository URL: {0}")]
    InvalidRepositoryUrl(String),

    #[error("Invalid transition duration: {0}")]
    InvalidDuration(String),

    #[error("Unknown easing curve: {0}")]
    InvalidEasing(String),

    #[error("Invalid boolean flag for {key}: {value}")]
    InvalidFlag { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
