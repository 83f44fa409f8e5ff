//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the JSON the browser client already speaks.

use kernel::id::AccountId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entity::account::Account;
use crate::domain::entity::ficha::{Ficha, FichaPatch, Path};

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Register / Login
// ============================================================================

/// Register request; absent fields are reported as missing, not as bad JSON
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public part of an account
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    #[serde(rename = "_id")]
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

impl From<&Account> for PublicUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id,
            username: account.username.to_string(),
            email: account.email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
    pub ficha: Ficha,
}

// ============================================================================
// Ficha
// ============================================================================

/// Partial ficha. A legacy `email` key may be present and is ignored:
/// the ficha updated is always the caller's.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateFichaRequest {
    pub ficha: FichaPatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateFichaResponse {
    pub message: &'static str,
    pub ficha: Ficha,
}

/// `?email=` lookup for the public read projections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPointsResponse {
    pub pontos_disponiveis: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingPointsResponse {
    pub pontos_restantes: i32,
}

// ============================================================================
// Paths & Connections
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPointsResponse {
    pub path_points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathsResponse {
    pub paths: Vec<Path>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePathsRequest {
    pub paths: Option<Vec<Path>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePathsResponse {
    pub message: &'static str,
    pub paths: Vec<Path>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveConnectionsRequest {
    pub path_connections: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsResponse {
    pub path_connections: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConnectionsResponse {
    pub message: &'static str,
    pub path_connections: Vec<Value>,
}
