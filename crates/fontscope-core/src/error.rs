// src/error.rs
use thiserror::Error;

/// Error hierarchy for font resolution and engine selection.
///
/// Most user-facing paths degrade silently to a default; these variants are
/// for callers that want the distinction explicitly.
#[derive(Error, Debug)]
pub enum FontScopeError {
    #[error("Typeface not found: requested {requested:?}, host substituted {substituted:?}")]
    TypefaceNotFound { requested: String, substituted: String },

    #[error("Render error: {engine}, {message}")]
    RenderingFailed { engine: String, message: String },

    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    #[error("Initialization failed: {reason}")]
    InitializationError { reason: String },
}

pub type FontScopeResult<T> = Result<T, FontScopeError>;
