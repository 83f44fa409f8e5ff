//! Board Router

use axum::{Router, routing::get};
use platform::token::TokenKeys;
use std::sync::Arc;

use crate::domain::repository::BoardStore;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the board router for any store implementation.
///
/// Mounted under `/api`.
pub fn board_router<R>(repo: R, tokens: Arc<TokenKeys>) -> Router
where
    R: BoardStore,
{
    let state = BoardAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route(
            "/cartazes-publicos",
            get(handlers::list_postings::<R>).post(handlers::create_posting::<R>),
        )
        .with_state(state)
}
