//! Account Router

use axum::{
    Router,
    routing::{get, post, put},
};
use platform::token::TokenKeys;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::AccountStore;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the account router for any store implementation.
///
/// Mounted under `/api/users`.
pub fn account_router<R>(repo: R, config: AccountConfig, tokens: Arc<TokenKeys>) -> Router
where
    R: AccountStore,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/updateFicha", put(handlers::update_ficha::<R>))
        .route("/ficha/cartas-pontos", get(handlers::card_points::<R>))
        .route(
            "/ficha/gastar-ponto-carta",
            put(handlers::spend_card_point::<R>).post(handlers::spend_card_point::<R>),
        )
        .route("/ficha/path-points", get(handlers::path_points::<R>))
        .route("/ficha/paths", get(handlers::paths::<R>))
        .route("/ficha/gastar-ponto-path", put(handlers::spend_path_point::<R>))
        .route("/ficha/update-paths", put(handlers::update_paths::<R>))
        .route("/ficha/salvar-conexoes", put(handlers::save_connections::<R>))
        .route("/ficha/conexoes", get(handlers::connections::<R>))
        .with_state(state)
}
