use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}: not found")]
    NotFound(String),
    #[error("{0} already exist")]
    AlreadyExists(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("canceled")]
    Canceled,
    #[error("{} does not exist", .path.display())]
    MissingFile { path: PathBuf },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApplicationError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApplicationError::Validation(message.into())
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, ApplicationError::Canceled)
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(err: config::ConfigError) -> Self {
        ApplicationError::Config(err.to_string())
    }
}
