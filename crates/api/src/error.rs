use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_core::author_filter::FilterError;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`FilterError`] for domain errors and adds the
/// request-parsing and storage variants raised at the handler boundary.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
///
/// Storage variants keep the underlying [`sqlx::Error`] as their source so
/// it can be logged, but the response body only ever carries a fixed message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected search filter.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The request body could not be decoded.
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// A path identifier was not a valid integer.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A read query against storage failed.
    #[error("Storage read failed")]
    StorageRead(#[source] sqlx::Error),

    /// A write (insert, update, delete) against storage failed.
    #[error("Storage write failed during {op}")]
    StorageWrite {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 404 for an author id with no row behind it.
    pub fn author_not_found(id: DbId) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        })
    }

    /// Map a failed write; `op` is the verb used in the response message.
    pub fn storage_write(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::StorageWrite { op, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidIdentifier(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
            },

            // --- Search filter errors ---
            AppError::Filter(filter) => match filter {
                FilterError::MissingParameter(name) => (
                    StatusCode::BAD_REQUEST,
                    "MISSING_PARAMETER",
                    format!("Missing query parameter: {name}"),
                ),
                FilterError::InvalidGenreId(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_GENRE_ID",
                    "Invalid genre ID".to_string(),
                ),
                FilterError::UnsupportedParamType(_) => (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_PARAM_TYPE",
                    "Invalid paramType".to_string(),
                ),
            },

            // --- Request parsing errors ---
            AppError::InvalidPayload(detail) => {
                tracing::debug!(%detail, "Rejected request payload");
                (
                    StatusCode::BAD_REQUEST,
                    "INVALID_PAYLOAD",
                    "Invalid request payload".to_string(),
                )
            }
            AppError::InvalidIdentifier(detail) => {
                tracing::debug!(%detail, "Rejected path identifier");
                (
                    StatusCode::BAD_REQUEST,
                    "INVALID_IDENTIFIER",
                    "Invalid author ID".to_string(),
                )
            }

            // --- Storage errors: detail is logged, never returned ---
            AppError::StorageRead(err) => {
                tracing::error!(error = %err, "Storage read failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_READ_FAILURE",
                    "Failed to query authors".to_string(),
                )
            }
            AppError::StorageWrite { op, source } => {
                tracing::error!(error = %source, op, "Storage write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_WRITE_FAILURE",
                    format!("Failed to {op} the author"),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
