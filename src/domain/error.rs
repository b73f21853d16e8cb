use std::io;

use thiserror::Error;

/// Library-wide error type for veo-prompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Field key does not name a form field.
    #[error("Unknown field '{0}'. Run 'veo-prompt fields' to list valid keys")]
    UnknownField(String),

    /// Select field was given a value outside its catalog.
    #[error("Invalid value '{value}' for '{field}'. Available: {available}")]
    InvalidOption { field: String, value: String, available: String },

    /// `--set` argument is not of the form `key=value`.
    #[error("Invalid assignment '{0}': expected key=value")]
    InvalidAssignment(String),

    /// Form document extension is not one of toml, yaml, yml, json.
    #[error("Unsupported form document '{0}': use a .toml, .yaml, .yml or .json file")]
    UnsupportedFormFormat(String),

    /// Form document could not be parsed or serialized.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Target file already exists.
    #[error("File already exists: {0}")]
    FileExists(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Interaction failed: {0}")]
    Interaction(String),

    /// Report template failed to render.
    #[error("Failed to render report: {0}")]
    RenderError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnknownField(_)
            | AppError::InvalidOption { .. }
            | AppError::InvalidAssignment(_)
            | AppError::UnsupportedFormFormat(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::FileExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ClipboardError(_) | AppError::Interaction(_) | AppError::RenderError(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
