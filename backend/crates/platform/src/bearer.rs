//! Bearer authentication
//!
//! Extracts `Authorization: Bearer <token>`, verifies it with the shared
//! [`TokenKeys`] and resolves the caller's account id. Handlers that take
//! [`Authenticated`] never run for an unauthenticated request.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use kernel::error::app_error::AppError;
use kernel::id::AccountId;

use crate::token::{TokenError, TokenKeys};

/// Message for a missing or malformed `Authorization` header
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Usuário não autenticado.";
/// Message for a bad signature or an expired token
pub const INVALID_TOKEN_MESSAGE: &str = "Token inválido ou expirado.";

const BEARER_PREFIX: &str = "Bearer ";

/// Error when reading the bearer token from headers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,
    #[error("Authorization header is not a bearer token")]
    Malformed,
}

/// Read the raw token from the `Authorization` header.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::Malformed)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

/// Verified caller identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated {
    pub account_id: AccountId,
}

impl<S> FromRequestParts<S> for Authenticated
where
    Arc<TokenKeys>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token missing");
            AppError::unauthorized(NOT_AUTHENTICATED_MESSAGE).with_code("NOT_AUTHENTICATED")
        })?;

        let keys = Arc::<TokenKeys>::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            let code = match e {
                TokenError::Expired => "TOKEN_EXPIRED",
                _ => "INVALID_TOKEN",
            };
            AppError::unauthorized(INVALID_TOKEN_MESSAGE).with_code(code)
        })?;

        Ok(Self {
            account_id: AccountId::from_uuid(claims.sub),
        })
    }
}
