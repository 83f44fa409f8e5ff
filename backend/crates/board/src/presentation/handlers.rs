//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use kernel::extract::AppJson;
use platform::bearer::Authenticated;
use platform::token::TokenKeys;
use std::sync::Arc;

use crate::application::{CreatePostingInput, CreatePostingUseCase, ListPostingsUseCase};
use crate::domain::repository::BoardStore;
use crate::error::BoardResult;
use crate::presentation::dto::{CreatePostingRequest, ListedPosting, PostingResponse};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<R>
where
    R: BoardStore,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenKeys>,
}

impl<R> FromRef<BoardAppState<R>> for Arc<TokenKeys>
where
    R: BoardStore,
{
    fn from_ref(state: &BoardAppState<R>) -> Self {
        state.tokens.clone()
    }
}

/// GET /api/cartazes-publicos
pub async fn list_postings<R>(
    State(state): State<BoardAppState<R>>,
) -> BoardResult<Json<Vec<ListedPosting>>>
where
    R: BoardStore,
{
    let listings = ListPostingsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(listings.into_iter().map(ListedPosting::from).collect()))
}

/// POST /api/cartazes-publicos
pub async fn create_posting<R>(
    State(state): State<BoardAppState<R>>,
    auth: Authenticated,
    AppJson(req): AppJson<CreatePostingRequest>,
) -> BoardResult<(StatusCode, Json<PostingResponse>)>
where
    R: BoardStore,
{
    let cartaz = CreatePostingUseCase::new(state.repo.clone())
        .execute(
            auth.account_id,
            CreatePostingInput {
                tipo: req.tipo,
                titulo: req.titulo,
                recompensa: req.recompensa,
                descricao: req.descricao,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PostingResponse::from(cartaz))))
}
