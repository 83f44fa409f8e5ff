//! Server configuration
//!
//! Read once at startup and passed down explicitly.

use std::fmt;

use axum::http::HeaderValue;
use platform::token::{TokenError, TokenKeys};
use thiserror::Error;

/// Request body cap, applied to every route
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SECRET must be set in release builds")]
    MissingSecret,

    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("invalid origin in FRONTEND_ORIGINS: {0:?}")]
    InvalidOrigin(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Origins allowed by CORS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `FRONTEND_ORIGINS=*`
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Clone)]
pub struct ApiConfig {
    /// Postgres connection string; `None` runs on the in-memory store
    pub database_url: Option<String>,
    pub secret: Option<String>,
    pub port: u16,
    pub frontend_origins: CorsOrigins,
    pub password_pepper: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default                      |
    /// |--------------------|------------------------------|
    /// | `DATABASE_URL`     | unset (in-memory store)      |
    /// | `SECRET`           | random in debug builds       |
    /// | `PORT`             | `5000`                       |
    /// | `FRONTEND_ORIGINS` | local dev servers            |
    /// | `PASSWORD_PEPPER`  | unset                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = var("SECRET");
        if secret.is_none() && !cfg!(debug_assertions) {
            return Err(ConfigError::MissingSecret);
        }

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let origins = var("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.into());
        let frontend_origins = parse_origins(&origins)?;

        Ok(Self {
            database_url: var("DATABASE_URL"),
            secret,
            port,
            frontend_origins,
            password_pepper: var("PASSWORD_PEPPER"),
        })
    }

    /// Token keys from `SECRET`, or a per-process random key when unset
    pub fn token_keys(&self) -> Result<TokenKeys, ConfigError> {
        match &self.secret {
            Some(secret) => Ok(TokenKeys::from_secret(secret.as_bytes())?),
            None => {
                tracing::warn!("SECRET not set, using a random signing key; tokens will not survive a restart");
                Ok(TokenKeys::with_random_secret())
            }
        }
    }

    pub fn account_config(&self) -> account::AccountConfig {
        match &self.password_pepper {
            Some(pepper) => account::AccountConfig::with_pepper(pepper.as_bytes()),
            None => account::AccountConfig::default(),
        }
    }
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    if raw.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.into()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("port", &self.port)
            .field("frontend_origins", &self.frontend_origins)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
