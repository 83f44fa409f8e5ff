//! Router assembly
//!
//! Both bounded contexts are mounted under `/api` with the shared middleware
//! stack on top.

use std::any::Any;
use std::sync::Arc;

use account::{InMemoryAccountStore, PgAccountRepository, account_router};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use board::{InMemoryBoardStore, PgCartazRepository, board_router};
use kernel::error::app_error::{AppError, INTERNAL_ERROR_MESSAGE};
use platform::token::TokenKeys;
use sqlx::PgPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ApiConfig, BODY_LIMIT_BYTES, CorsOrigins};
use crate::health::{HealthCheck, health_router};

/// Store the server runs on
#[derive(Clone)]
pub enum Backend {
    Postgres(PgPool),
    /// The board shares this account store so poster spends hit the same fichas
    InMemory(InMemoryAccountStore),
}

/// Build the full application router
pub fn build_router(backend: Backend, config: &ApiConfig, tokens: Arc<TokenKeys>) -> Router {
    let account_config = config.account_config();

    let (users, board, health) = match backend {
        Backend::Postgres(pool) => (
            account_router(
                PgAccountRepository::new(pool.clone()),
                account_config,
                tokens.clone(),
            ),
            board_router(PgCartazRepository::new(pool.clone()), tokens),
            HealthCheck::Postgres(pool),
        ),
        Backend::InMemory(accounts) => (
            account_router(accounts.clone(), account_config, tokens.clone()),
            board_router(InMemoryBoardStore::new(accounts), tokens),
            HealthCheck::InMemory,
        ),
    };

    let api = Router::new()
        .nest("/users", users)
        .merge(board)
        .merge(health_router(health));

    Router::new()
        .nest("/api", api)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

async fn route_not_found() -> AppError {
    AppError::not_found("Rota não encontrada").with_code("ROUTE_NOT_FOUND")
}

pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    AppError::internal(INTERNAL_ERROR_MESSAGE).into_response()
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
