//! Unified application error type.
//! All modules (api, core, export, notify, cli) return AppError so that every
//! command reports failures the same way.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // HTTP / API
    // ---------------------------
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API url: {0}")]
    Url(#[from] url::ParseError),

    #[error("API error ({status}): {payload}")]
    Api {
        status: u16,
        payload: serde_json::Value,
    },

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("No active session, run `hrportal login` first ({0})")]
    NoSession(String),

    // ---------------------------
    // Form validation
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Message carried by an API error payload, if the server sent one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api { payload, .. } => payload
                .get("message")
                .or_else(|| payload.get("error"))
                .and_then(|m| m.as_str()),
            _ => None,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(format!("CSV write error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
