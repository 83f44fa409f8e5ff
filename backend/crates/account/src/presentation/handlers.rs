//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppQuery};
use platform::bearer::Authenticated;
use platform::token::TokenKeys;
use std::sync::Arc;

use crate::application::{
    AccountConfig, FichaQueryUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    ReplacePathsUseCase, SaveConnectionsUseCase, SpendPointUseCase, UpdateFichaUseCase,
};
use crate::domain::repository::AccountStore;
use crate::domain::value_object::point_pool::PointPool;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    CardPointsResponse, ConnectionsResponse, EmailQuery, LoginRequest, LoginResponse,
    MessageResponse, PathPointsResponse, PathsResponse, PublicUser, RegisterRequest,
    RemainingPointsResponse, SaveConnectionsRequest, SaveConnectionsResponse,
    UpdateFichaRequest, UpdateFichaResponse, UpdatePathsRequest, UpdatePathsResponse,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
    pub tokens: Arc<TokenKeys>,
}

impl<R> FromRef<AccountAppState<R>> for Arc<TokenKeys>
where
    R: AccountStore,
{
    fn from_ref(state: &AccountAppState<R>) -> Self {
        state.tokens.clone()
    }
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AccountResult<(StatusCode, Json<MessageResponse>)>
where
    R: AccountStore,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Usuário criado com sucesso!",
        }),
    ))
}

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AccountResult<Json<LoginResponse>>
where
    R: AccountStore,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: PublicUser::from(&output.account),
        ficha: output.ficha,
    }))
}

// ============================================================================
// Ficha
// ============================================================================

/// PUT /api/users/updateFicha
pub async fn update_ficha<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
    AppJson(req): AppJson<UpdateFichaRequest>,
) -> AccountResult<Json<UpdateFichaResponse>>
where
    R: AccountStore,
{
    let use_case = UpdateFichaUseCase::new(state.repo.clone());
    let ficha = use_case.execute(auth.account_id, req.ficha).await?;

    Ok(Json(UpdateFichaResponse {
        message: "Ficha atualizada!",
        ficha,
    }))
}

/// GET /api/users/ficha/cartas-pontos?email=
pub async fn card_points<R>(
    State(state): State<AccountAppState<R>>,
    AppQuery(query): AppQuery<EmailQuery>,
) -> AccountResult<Json<CardPointsResponse>>
where
    R: AccountStore,
{
    let ficha = FichaQueryUseCase::new(state.repo.clone())
        .by_email(&query.email)
        .await?;

    Ok(Json(CardPointsResponse {
        pontos_disponiveis: ficha.pools.get(PointPool::Cards),
    }))
}

/// PUT|POST /api/users/ficha/gastar-ponto-carta
pub async fn spend_card_point<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
) -> AccountResult<Json<RemainingPointsResponse>>
where
    R: AccountStore,
{
    spend(state, auth, PointPool::Cards).await
}

/// PUT /api/users/ficha/gastar-ponto-path
pub async fn spend_path_point<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
) -> AccountResult<Json<RemainingPointsResponse>>
where
    R: AccountStore,
{
    spend(state, auth, PointPool::Paths).await
}

async fn spend<R>(
    state: AccountAppState<R>,
    auth: Authenticated,
    pool: PointPool,
) -> AccountResult<Json<RemainingPointsResponse>>
where
    R: AccountStore,
{
    let remaining = SpendPointUseCase::new(state.repo.clone())
        .execute(auth.account_id, pool)
        .await?;

    Ok(Json(RemainingPointsResponse {
        pontos_restantes: remaining,
    }))
}

// ============================================================================
// Paths & Connections
// ============================================================================

/// GET /api/users/ficha/path-points?email=
pub async fn path_points<R>(
    State(state): State<AccountAppState<R>>,
    AppQuery(query): AppQuery<EmailQuery>,
) -> AccountResult<Json<PathPointsResponse>>
where
    R: AccountStore,
{
    let ficha = FichaQueryUseCase::new(state.repo.clone())
        .by_email(&query.email)
        .await?;

    Ok(Json(PathPointsResponse {
        path_points: ficha.pools.get(PointPool::Paths),
    }))
}

/// GET /api/users/ficha/paths?email=
pub async fn paths<R>(
    State(state): State<AccountAppState<R>>,
    AppQuery(query): AppQuery<EmailQuery>,
) -> AccountResult<Json<PathsResponse>>
where
    R: AccountStore,
{
    let ficha = FichaQueryUseCase::new(state.repo.clone())
        .by_email(&query.email)
        .await?;

    Ok(Json(PathsResponse { paths: ficha.paths }))
}

/// PUT /api/users/ficha/update-paths
pub async fn update_paths<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
    AppJson(req): AppJson<UpdatePathsRequest>,
) -> AccountResult<Json<UpdatePathsResponse>>
where
    R: AccountStore,
{
    let paths = req.paths.ok_or(AccountError::MissingFields)?;
    let paths = ReplacePathsUseCase::new(state.repo.clone())
        .execute(auth.account_id, paths)
        .await?;

    Ok(Json(UpdatePathsResponse {
        message: "Paths atualizados!",
        paths,
    }))
}

/// PUT /api/users/ficha/salvar-conexoes
pub async fn save_connections<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
    AppJson(req): AppJson<SaveConnectionsRequest>,
) -> AccountResult<Json<SaveConnectionsResponse>>
where
    R: AccountStore,
{
    let connections = req.path_connections.ok_or(AccountError::MissingFields)?;
    let path_connections = SaveConnectionsUseCase::new(state.repo.clone())
        .execute(auth.account_id, connections)
        .await?;

    Ok(Json(SaveConnectionsResponse {
        message: "Conexões salvas!",
        path_connections,
    }))
}

/// GET /api/users/ficha/conexoes
pub async fn connections<R>(
    State(state): State<AccountAppState<R>>,
    auth: Authenticated,
) -> AccountResult<Json<ConnectionsResponse>>
where
    R: AccountStore,
{
    let ficha = FichaQueryUseCase::new(state.repo.clone())
        .by_account(&auth.account_id)
        .await?;

    Ok(Json(ConnectionsResponse {
        path_connections: ficha.path_connections,
    }))
}
