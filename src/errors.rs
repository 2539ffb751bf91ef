//! Unified application error type.
//! All modules (core, store, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote row store
    // ---------------------------
    #[error("Remote store error: {0}")]
    RemoteStore(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Malformed stored data: {0}")]
    DataParse(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Holiday calendar error: {0}")]
    HolidayCalendar(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::RemoteStore(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
