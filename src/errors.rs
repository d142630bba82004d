//! Unified application error type.
//! All modules (loader, session, cli, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {}", .0.display())]
    DataFileMissing(PathBuf),

    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("Invalid start time at row {row}: '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Invalid trip duration at row {row}: '{value}'")]
    InvalidDuration { row: usize, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
