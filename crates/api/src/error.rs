use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator::{ValidationError, ValidationErrors};

use cinevault_core::error::CoreError;
use cinevault_tmdb::TmdbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform JSON error envelope:
/// `{ "message", "code", "statusCode", "errors"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinevault_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An upstream TMDB failure. The handler supplies the endpoint-specific
    /// code and message; the underlying error message is passed through in
    /// the envelope's `errors` field.
    #[error("{message}")]
    Upstream {
        code: &'static str,
        message: &'static str,
        #[source]
        source: TmdbError,
    },

    /// Request validation failed (422) with field-level errors.
    #[error("Validation failed")]
    Validation {
        code: &'static str,
        errors: ValidationErrors,
    },

    /// Request validation failed, reported as a 400 (the movie-detail
    /// endpoint historically used 400 where everything else uses 422).
    #[error("Validation error")]
    BadRequest {
        code: &'static str,
        errors: ValidationErrors,
    },

    /// A missing resource with an endpoint-specific code.
    #[error("{message}")]
    NotFound {
        code: &'static str,
        message: &'static str,
    },

    /// The request body was rejected before reaching the handler (invalid
    /// JSON, wrong content type). Raised by [`crate::extract::AppJson`].
    #[error("{0}")]
    MalformedBody(#[from] axum::extract::rejection::JsonRejection),

    /// The query string failed to deserialize. Raised by
    /// [`crate::extract::AppQuery`].
    #[error("{0}")]
    MalformedQuery(#[from] axum::extract::rejection::QueryRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a TMDB error with the endpoint's error code and message.
    pub fn upstream(code: &'static str, message: &'static str, source: TmdbError) -> Self {
        AppError::Upstream {
            code,
            message,
            source,
        }
    }
}

/// Build a [`ValidationErrors`] holding a single field-level error, for
/// validation performed outside the `validator` derive (e.g. path params).
pub fn field_error(
    field: &'static str,
    code: &'static str,
    message: &'static str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    errors.add(field, error);
    errors
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation:failed",
                    msg.clone(),
                    None,
                ),
                CoreError::Conflict(msg) => {
                    (StatusCode::CONFLICT, "general:conflict", msg.clone(), None)
                }
                CoreError::Unauthorized(msg) => (
                    StatusCode::UNAUTHORIZED,
                    "auth:unauthorized",
                    msg.clone(),
                    None,
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Upstream TMDB failures ---
            AppError::Upstream {
                code,
                message,
                source,
            } => {
                tracing::error!(error = %source, code, "Upstream TMDB request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    *code,
                    (*message).to_string(),
                    Some(json!(source.to_string())),
                )
            }

            // --- Validation failures ---
            AppError::Validation { code, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                *code,
                "Validation failed".to_string(),
                Some(json!(errors)),
            ),
            AppError::BadRequest { code, errors } => (
                StatusCode::BAD_REQUEST,
                *code,
                "Validation error".to_string(),
                Some(json!(errors)),
            ),

            // --- Missing resources ---
            AppError::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                *code,
                (*message).to_string(),
                None,
            ),

            // --- Rejected requests ---
            AppError::MalformedBody(rejection) => (
                rejection.status(),
                "general:bad_request",
                rejection.body_text(),
                None,
            ),
            AppError::MalformedQuery(rejection) => (
                rejection.status(),
                "general:bad_request",
                rejection.body_text(),
                None,
            ),

            // --- Anything else ---
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "general:internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "message": message,
            "code": code,
            "statusCode": status.as_u16(),
        });
        if let (Some(object), Some(errors)) = (body.as_object_mut(), errors) {
            object.insert("errors".to_string(), errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409 -- this is how a duplicate favorite add surfaces.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(
    err: &sqlx::Error,
) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "store:not_found",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "store:conflict",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                        None,
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store:failed",
                "An internal error occurred".to_string(),
                None,
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store:failed",
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}
