//! Unified error handling.
//!
//! Provides a single error type for the data-access layer that can be
//! converted to Axum HTTP responses for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Persistence
    /// The storage backend could not be reached or timed out.
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// The query was malformed or rejected by the engine.
    #[error("Query error: {0}")]
    Query(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::PersistenceUnavailable(_) => "PERSISTENCE_UNAVAILABLE",
            AppError::Query(_) => "QUERY_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PersistenceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Query(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::PersistenceUnavailable(detail) => {
                tracing::error!("Persistence unavailable: {}", detail);
                "The data store is currently unavailable".to_string()
            }
            AppError::Query(detail) => {
                tracing::error!("Query error: {}", detail);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Database Error Classification (SeaORM)
// =============================================================================

/// Connection-level failures mean the engine is unreachable, including a
/// socket that dies while a statement is in flight. Anything the engine
/// answered with is a query error.
#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, RuntimeErr};

        match err {
            DbErr::ConnectionAcquire(e) => AppError::PersistenceUnavailable(e.to_string()),
            DbErr::Conn(e) => AppError::PersistenceUnavailable(e.to_string()),
            DbErr::Query(RuntimeErr::SqlxError(ref e))
            | DbErr::Exec(RuntimeErr::SqlxError(ref e))
                if is_connection_lost(e) =>
            {
                AppError::PersistenceUnavailable(err.to_string())
            }
            other => AppError::Query(other.to_string()),
        }
    }
}

#[cfg(feature = "database")]
fn is_connection_lost(err: &sea_orm::sqlx::Error) -> bool {
    use sea_orm::sqlx::Error;

    matches!(
        err,
        Error::Io(_) | Error::PoolTimedOut | Error::PoolClosed | Error::WorkerCrashed
    )
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::PersistenceUnavailable("down".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Query("syntax".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::validation("Title is required").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_user_message_hides_storage_details() {
        let err = AppError::Query("relation \"users\" does not exist".into());
        assert_eq!(err.user_message(), "A database error occurred");

        let err = AppError::PersistenceUnavailable("tcp connect refused".into());
        assert!(!err.user_message().contains("tcp"));
    }

    #[test]
    fn test_domain_error_conversion() {
        let err = AppError::from(DomainError::validation("Title is required"));
        assert!(matches!(err, AppError::Validation(ref m) if m == "Title is required"));

        let err = AppError::from(DomainError::internal("boom"));
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = AppError::PersistenceUnavailable("down".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "PERSISTENCE_UNAVAILABLE");
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_db_error_classification() {
        use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};

        let err = AppError::from(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(err, AppError::PersistenceUnavailable(_)));

        let err = AppError::from(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(err, AppError::PersistenceUnavailable(_)));

        let err = AppError::from(DbErr::Query(RuntimeErr::Internal("bad sql".into())));
        assert!(matches!(err, AppError::Query(_)));

        let err = AppError::from(DbErr::Custom("unexpected".into()));
        assert!(matches!(err, AppError::Query(_)));
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_lost_connection_during_statement_is_unavailable() {
        use sea_orm::{sqlx, DbErr, RuntimeErr};
        use std::io::{Error as IoError, ErrorKind};

        let reset = sqlx::Error::Io(IoError::from(ErrorKind::ConnectionReset));
        let err = AppError::from(DbErr::Query(RuntimeErr::SqlxError(reset)));
        assert!(matches!(err, AppError::PersistenceUnavailable(_)));

        let timed_out = sqlx::Error::Io(IoError::from(ErrorKind::TimedOut));
        let err = AppError::from(DbErr::Exec(RuntimeErr::SqlxError(timed_out)));
        assert!(matches!(err, AppError::PersistenceUnavailable(_)));

        for lost in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::WorkerCrashed,
        ] {
            let err = AppError::from(DbErr::Query(RuntimeErr::SqlxError(lost)));
            assert!(matches!(err, AppError::PersistenceUnavailable(_)));
        }

        let err = AppError::from(DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::RowNotFound)));
        assert!(matches!(err, AppError::Query(_)));
    }
}
