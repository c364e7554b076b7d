use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tilepath operations
#[derive(Error, Diagnostic, Debug)]
pub enum TilepathError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tilepath::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tilepath::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tilepath::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tilepath::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Resolve error: {message}")]
    #[diagnostic(code(tilepath::resolve))]
    Resolve {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TilepathError>;
