//! Error types for degrees-core.

use thiserror::Error;

use crate::model::ActorId;

/// Search and data-source error types.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data source answered with a non-success status.
    #[error("Fetching {kind} '{id}' failed with status {status}")]
    Status {
        /// Record kind (`actor` or `movie`).
        kind: &'static str,
        /// Identifier that was requested.
        id: String,
        /// HTTP status code.
        status: u16,
    },

    /// Any other data-source failure.
    #[error("Data source error: {0}")]
    Source(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path reconstruction found a node without a recorded predecessor.
    #[error("No predecessor recorded for actor '{0}'")]
    BrokenPath(ActorId),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for degrees operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("timeout_secs must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: timeout_secs must be positive"
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            kind: "actor",
            id: "amitabh-bachchan".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Fetching actor 'amitabh-bachchan' failed with status 404"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_broken_path_display() {
        let err = Error::BrokenPath(ActorId::from("ghost"));
        assert_eq!(err.to_string(), "No predecessor recorded for actor 'ghost'");
    }
}
