use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use onboardpro_core::access::{DenyReason, LOGIN_PATH};
use onboardpro_core::error::CoreError;
use onboardpro_core::navigation::RECOVERY_PATH;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{ "error", "code" }`, plus `redirect` when the client should navigate
/// somewhere, `retryable` for transient failures and `unanswered` for
/// incomplete quiz submissions.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `onboardpro_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The access gate refused the request.
    #[error("Access denied: {}", .0.message())]
    Denied(DenyReason),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DenyReason> for AppError {
    fn from(reason: DenyReason) -> Self {
        Self::Denied(reason)
    }
}

struct ErrorParts {
    status: StatusCode,
    code: &'static str,
    message: String,
    redirect: Option<&'static str>,
    retryable: bool,
    unanswered: Option<Vec<usize>>,
}

impl ErrorParts {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            redirect: None,
            retryable: false,
            unanswered: None,
        }
    }

    fn redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ErrorParts::new(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                )
                .redirect(RECOVERY_PATH),
                CoreError::Validation(msg) => {
                    ErrorParts::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::IncompleteAnswers { unanswered } => ErrorParts {
                    unanswered: Some(unanswered.clone()),
                    ..ErrorParts::new(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "INCOMPLETE_ANSWERS",
                        core.to_string(),
                    )
                },
                CoreError::InvalidCredentials => ErrorParts::new(
                    StatusCode::UNAUTHORIZED,
                    "INVALID_CREDENTIALS",
                    core.to_string(),
                ),
                CoreError::Conflict(msg) => {
                    ErrorParts::new(StatusCode::CONFLICT, "CONFLICT", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    ErrorParts::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                        .redirect(LOGIN_PATH)
                }
                CoreError::Unavailable(msg) => {
                    tracing::warn!(error = %msg, "Collaborator unavailable");
                    ErrorParts {
                        retryable: true,
                        ..ErrorParts::new(
                            StatusCode::SERVICE_UNAVAILABLE,
                            "UNAVAILABLE",
                            msg.clone(),
                        )
                    }
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    ErrorParts::internal()
                }
            },

            // --- Access gate ---
            AppError::Denied(reason) => {
                let (status, code) = match reason {
                    DenyReason::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
                    DenyReason::WrongRole { .. } => (StatusCode::FORBIDDEN, "WRONG_ROLE"),
                };
                ErrorParts::new(status, code, reason.message()).redirect(reason.redirect())
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ErrorParts::internal()
            }
        };

        let mut body = json!({
            "error": parts.message,
            "code": parts.code,
        });
        if let Some(redirect) = parts.redirect {
            body["redirect"] = json!(redirect);
        }
        if parts.retryable {
            body["retryable"] = json!(true);
        }
        if let Some(unanswered) = parts.unanswered {
            body["unanswered"] = json!(unanswered);
        }

        (parts.status, axum::Json(body)).into_response()
    }
}
