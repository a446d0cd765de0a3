//! # App Error Types
//!
//! Unified error type for the storefront app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Startup (config, catalog)                                             │
//! │      AppError ─────────────────────────► main logs it, exit code 1     │
//! │                                                                         │
//! │  Running (UI events)                                                   │
//! │      ValidationError → CoreError → AppError ──► shell prints, goes on  │
//! │                                                                         │
//! │  Data layer                                                            │
//! │      SinkError ──► AnalyticsEmitter logs a warning, swallows it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the storefront app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A catalog entry in the config failed validation.
    #[error("Catalog entry '{id}' is invalid: {source}")]
    InvalidCatalogEntry {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// Shell asked for a product id that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Shell input did not match any command.
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// Domain error from storefront-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O on stdin/stdout or the data-layer file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// A data-layer sink refused a record.
///
/// Never reaches the caller of `emit`; the emitter logs and drops it.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("data layer is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write record: {0}")]
    Write(#[from] std::io::Error),
}
