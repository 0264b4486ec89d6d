//! Error types for ModelShare.
//!
//! Every data service failure is expressed as a [`ModelShareError`]. Each
//! variant maps onto a procedure error code (`NOT_FOUND`, `BAD_REQUEST`,
//! `INTERNAL_SERVER_ERROR`) and a JSON-RPC numeric code so that local and
//! remote callers observe the same failure classes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ModelShare library.
#[derive(Debug, Error)]
pub enum ModelShareError {
    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    // Database errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Network errors (remote data service)
    #[error("Network error: {message}")]
    Network { message: String },

    /// An error object returned by a remote JSON-RPC server.
    #[error("Remote error {code}: {message}")]
    Remote { code: i32, message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for ModelShare operations.
pub type Result<T> = std::result::Result<T, ModelShareError>;

/// Procedure-level error classes surfaced to callers of the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<std::io::Error> for ModelShareError {
    fn from(err: std::io::Error) -> Self {
        ModelShareError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ModelShareError {
    fn from(err: serde_json::Error) -> Self {
        ModelShareError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<rusqlite::Error> for ModelShareError {
    fn from(err: rusqlite::Error) -> Self {
        ModelShareError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for ModelShareError {
    fn from(err: reqwest::Error) -> Self {
        ModelShareError::Network {
            message: err.to_string(),
        }
    }
}

impl ModelShareError {
    /// Shorthand for a missing row.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ModelShareError::NotFound { entity, id }
    }

    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ModelShareError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Procedure error class of this error.
    ///
    /// Remote errors are classified by their JSON-RPC code so a client sees
    /// the same class the server produced.
    pub fn code(&self) -> ErrorCode {
        match self {
            ModelShareError::NotFound { .. } => ErrorCode::NotFound,
            ModelShareError::InvalidParams { .. } | ModelShareError::Validation { .. } => {
                ErrorCode::BadRequest
            }
            ModelShareError::Remote { code, .. } => match *code {
                -32002 => ErrorCode::NotFound,
                -32602 | -32005 => ErrorCode::BadRequest,
                _ => ErrorCode::InternalServerError,
            },
            _ => ErrorCode::InternalServerError,
        }
    }

    /// Convert to a JSON-RPC error code.
    ///
    /// Standard codes:
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Application codes:
    /// - -32000: Network/connectivity error
    /// - -32002: Entity not found
    /// - -32005: Validation error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            ModelShareError::Network { .. } => -32000,
            ModelShareError::NotFound { .. } => -32002,
            ModelShareError::InvalidParams { .. } => -32602,
            ModelShareError::Validation { .. } => -32005,
            ModelShareError::Remote { code, .. } => *code,
            _ => -32603,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ModelShareError::not_found("user", 7);
        assert_eq!(err.to_string(), "No user with id 7");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_rpc_error_code(), -32002);
    }

    #[test]
    fn test_database_errors_are_internal() {
        let err = ModelShareError::Database {
            message: "disk I/O error".into(),
            source: None,
        };
        assert_eq!(err.code(), ErrorCode::InternalServerError);
        assert_eq!(err.code().as_str(), "INTERNAL_SERVER_ERROR");
        assert_eq!(err.to_rpc_error_code(), -32603);
    }

    #[test]
    fn test_remote_errors_keep_their_class() {
        let err = ModelShareError::Remote {
            code: -32002,
            message: "No model with id 3".into(),
        };
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_rpc_error_code(), -32002);

        let err = ModelShareError::Remote {
            code: -32603,
            message: "boom".into(),
        };
        assert_eq!(err.code(), ErrorCode::InternalServerError);
    }

    #[test]
    fn test_invalid_params_are_bad_requests() {
        let err = ModelShareError::InvalidParams {
            message: "Missing required parameter: id".into(),
        };
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.to_rpc_error_code(), -32602);
    }
}
