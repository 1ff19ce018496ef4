//! Unified application error type.
//! All modules (core, input, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Input reading
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file error: {0}")]
    Input(String),

    #[error("Too many columns in input ({got}), maximum allowed is {max}")]
    TooManyColumns { got: usize, max: usize },

    // ---------------------------
    // Analysis errors
    // ---------------------------
    #[error("Required columns not found: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Input table has no data rows after cleaning")]
    EmptyInput,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
