use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LpServiceError {
    #[error("{message}")]
    SchemaError { message: String },

    #[error("{message}")]
    ValidationError { field: String, message: String },

    #[error("Solver failure: {message}")]
    SolverError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Solver,
    Configuration,
    System,
}

impl LpServiceError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemaError { .. } | Self::ValidationError { .. } => ErrorCategory::Client,
            Self::SolverError { .. } => ErrorCategory::Solver,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Client => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCategory::Solver | ErrorCategory::Configuration | ErrorCategory::System => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LpServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, LpServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_unprocessable() {
        let schema = LpServiceError::schema("unknown variant `minimize`");
        let business = LpServiceError::validation("objective", "objective must not be empty");

        assert_eq!(schema.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(business.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(business.to_string(), "objective must not be empty");
    }

    #[test]
    fn test_solver_errors_are_internal() {
        let err = LpServiceError::SolverError {
            message: "solve task panicked".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Solver);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
