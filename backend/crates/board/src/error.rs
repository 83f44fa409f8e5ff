//! Board Error Types

use account::AccountError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// tipo, titulo, recompensa and descricao are all required
    #[error("Preencha todos os campos.")]
    MissingFields,

    #[error("Usuário não encontrado.")]
    AuthorNotFound,

    /// Author has no poster points left
    #[error("Pontos insuficientes para criar cartaz.")]
    InsufficientPoints,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::MissingFields | BoardError::InsufficientPoints => ErrorKind::BadRequest,
            BoardError::AuthorNotFound => ErrorKind::NotFound,
            BoardError::Database(_) | BoardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BoardError::MissingFields => "MISSING_FIELDS",
            BoardError::AuthorNotFound => "ACCOUNT_NOT_FOUND",
            BoardError::InsufficientPoints => "INSUFFICIENT_POINTS",
            BoardError::Database(_) | BoardError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_code(self.code())
    }

    fn log(&self) {
        match self {
            BoardError::Database(e) => {
                tracing::error!(error = %e, "Board database error");
            }
            BoardError::Internal(msg) => {
                tracing::error!(message = %msg, "Board internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Board error");
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Errors from the author's ficha while spending a poster point
impl From<AccountError> for BoardError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::AccountNotFound => BoardError::AuthorNotFound,
            AccountError::InsufficientPoints(_) => BoardError::InsufficientPoints,
            AccountError::Database(e) => BoardError::Database(e),
            other => BoardError::Internal(other.to_string()),
        }
    }
}
