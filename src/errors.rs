//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Session store
    // ---------------------------
    #[error("Failed to load sessions: {0}")]
    Load(String),

    #[error("Failed to save sessions: {0}")]
    Save(String),

    #[error("{}", not_found_message(.0))]
    NotFound(Vec<u64>),

    #[error("No entries were deleted.")]
    NothingDeleted,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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

fn not_found_message(ids: &[u64]) -> String {
    match ids {
        [id] => format!("Entry with ID {id} not found."),
        _ => {
            let list = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Entries with IDs {list} not found.")
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
