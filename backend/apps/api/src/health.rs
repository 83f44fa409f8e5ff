//! Health check
//!
//! `GET /api/health` reports the store the server runs on and whether it
//! answers.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Clone)]
pub enum HealthCheck {
    Postgres(PgPool),
    InMemory,
}

impl HealthCheck {
    async fn database_status(&self) -> &'static str {
        match self {
            HealthCheck::Postgres(pool) => match sqlx::query("SELECT 1").execute(pool).await {
                Ok(_) => "connected",
                Err(e) => {
                    tracing::warn!(error = %e, "Health check database ping failed");
                    "disconnected"
                }
            },
            HealthCheck::InMemory => "in-memory",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

async fn health(State(check): State<HealthCheck>) -> Json<HealthResponse> {
    let database = check.database_status().await;

    Json(HealthResponse {
        status: if database == "disconnected" {
            "degraded"
        } else {
            "ok"
        },
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub fn health_router(check: HealthCheck) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(check)
}
