//! Error types and Result aliases for DrillPad

use std::fmt;
use std::path::PathBuf;

/// Result type alias for DrillPad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for DrillPad
#[derive(Debug)]
pub enum Error {
    // === Server exchange errors ===
    /// A request to the exercise platform failed in transport
    /// (unreachable, non-2xx, connection dropped)
    RequestFailed {
        endpoint: String,
        reason: String,
    },

    /// The server replied, but the body could not be decoded as the
    /// expected JSON shape
    MalformedResponse {
        endpoint: String,
        reason: String,
    },

    // === Exercise catalog errors ===
    /// The bundled or user-supplied exercise catalog could not be parsed
    CatalogParseFailed {
        reason: String,
    },

    /// No exercise with the given id exists in the catalog
    ExerciseNotFound {
        id: i64,
    },

    /// The selected exercise carries no starter template
    TemplateMissing {
        id: i64,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    // === Runtime errors ===
    /// The background network worker could not be started
    WorkerStartFailed {
        reason: String,
    },

    // === Serialization errors ===
    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RequestFailed { endpoint, reason } => {
                write!(f, "Request to '{}' failed: {}", endpoint, reason)
            }
            Error::MalformedResponse { endpoint, reason } => {
                write!(f, "Malformed response from '{}': {}", endpoint, reason)
            }
            Error::CatalogParseFailed { reason } => {
                write!(f, "Failed to parse exercise catalog: {}", reason)
            }
            Error::ExerciseNotFound { id } => {
                write!(f, "Exercise {} not found in catalog", id)
            }
            Error::TemplateMissing { id } => {
                write!(f, "Exercise {} has no starter template", id)
            }
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::WorkerStartFailed { reason } => {
                write!(f, "Failed to start network worker: {}", reason)
            }
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
