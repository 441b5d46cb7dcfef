//! Centralized error handling for qrn
//! Defines the two recoverable data errors and the helpers that consume them

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

/// A failure to interpret external data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QError {
    /// The randomness service answered with something we cannot read
    #[error("Error: unable to parse the response from the randomness service.\n  {0}")]
    ParseResponseError(String),
    /// The local settings file is malformed
    #[error("Error: unable to parse the settings file.\n  {0}")]
    ParseSettingsError(String),
}

/// Any failure a collaborator call can produce
#[derive(Debug, Error)]
pub enum QrnError {
    #[error(transparent)]
    Q(#[from] QError),
    #[error("Error: file system operation failed.\n  {0}")]
    Io(#[from] io::Error),
    #[error("Error: could not reach the randomness service.\n  {0}")]
    Transport(String),
    #[error("Error: cannot fetch {requested} bytes.\n  At most {max} bytes can be fetched at once.")]
    RequestTooLarge { requested: usize, max: usize },
}

impl QrnError {
    /// Short machine-readable tag, used in log lines
    pub fn code(&self) -> ErrorCode {
        match self {
            QrnError::Q(QError::ParseResponseError(_)) => ErrorCode::ParseResponse,
            QrnError::Q(QError::ParseSettingsError(_)) => ErrorCode::ParseSettings,
            QrnError::Io(_) => ErrorCode::Io,
            QrnError::Transport(_) => ErrorCode::Transport,
            QrnError::RequestTooLarge { .. } => ErrorCode::RequestTooLarge,
        }
    }
}

impl PartialEq<QError> for QrnError {
    fn eq(&self, other: &QError) -> bool {
        matches!(self, QrnError::Q(err) if err == other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseResponse,
    ParseSettings,
    Io,
    Transport,
    RequestTooLarge,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseResponse => write!(f, "PARSE_RESPONSE"),
            Self::ParseSettings => write!(f, "PARSE_SETTINGS"),
            Self::Io => write!(f, "IO"),
            Self::Transport => write!(f, "TRANSPORT"),
            Self::RequestTooLarge => write!(f, "REQUEST_TOO_LARGE"),
        }
    }
}

/// Result alias for qrn operations
pub type Result<T> = std::result::Result<T, QrnError>;

/// Fire-and-report: print the rendered error to `out` and carry on
///
/// Returns `None` on failure so the caller can skip whatever depended on the value.
pub fn report<T, W: Write + ?Sized>(result: Result<T>, out: &mut W) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}: {}", err.code(), err);
            let _ = writeln!(out, "{err}");
            None
        }
    }
}

/// Fire-or-crash: only for state needed before the console starts
pub fn or_crash<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{}: {}", err.code(), err);
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
