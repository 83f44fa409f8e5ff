//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the Portuguese
//! messages the browser client shows to the player.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use platform::token::TokenError;
use thiserror::Error;

use crate::domain::value_object::point_pool::PointPool;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// A required registration/login field is empty
    #[error("Preencha todos os campos.")]
    MissingFields,

    #[error("Email inválido.")]
    InvalidEmail,

    #[error("Nome de usuário inválido.")]
    InvalidUserName,

    #[error("Senha inválida.")]
    InvalidPassword(#[from] PasswordPolicyError),

    /// Ficha patch rejected (e.g. negative point pool)
    #[error("{0}")]
    InvalidFicha(String),

    /// Registration with an email that already exists
    #[error("Email já cadastrado.")]
    EmailTaken,

    #[error("Usuário não encontrado.")]
    AccountNotFound,

    /// Wrong password
    #[error("Senha incorreta.")]
    InvalidCredentials,

    /// Spend attempted on an empty pool
    #[error("{}", .0.insufficient_message())]
    InsufficientPoints(PointPool),

    /// Bulk save lost a race against another write
    #[error("A ficha foi alterada por outra requisição. Recarregue e tente novamente.")]
    FichaConflict,

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingFields
            | AccountError::InvalidEmail
            | AccountError::InvalidUserName
            | AccountError::InvalidPassword(_)
            | AccountError::InvalidFicha(_)
            | AccountError::EmailTaken
            | AccountError::InvalidCredentials
            | AccountError::InsufficientPoints(_) => ErrorKind::BadRequest,
            AccountError::AccountNotFound => ErrorKind::NotFound,
            AccountError::FichaConflict => ErrorKind::Conflict,
            AccountError::Token(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Stable machine-readable code sent next to the message
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::MissingFields => "MISSING_FIELDS",
            AccountError::InvalidEmail => "INVALID_EMAIL",
            AccountError::InvalidUserName => "INVALID_USERNAME",
            AccountError::InvalidPassword(_) => "INVALID_PASSWORD",
            AccountError::InvalidFicha(_) => "INVALID_FICHA",
            AccountError::EmailTaken => "EMAIL_TAKEN",
            AccountError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AccountError::InvalidCredentials => "BAD_CREDENTIALS",
            AccountError::InsufficientPoints(_) => "INSUFFICIENT_POINTS",
            AccountError::FichaConflict => "FICHA_CONFLICT",
            AccountError::Token(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::FichaConflict => {
                tracing::warn!("Concurrent ficha update rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}
