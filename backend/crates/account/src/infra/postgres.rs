//! PostgreSQL Repository Implementations
//!
//! `users` holds credentials, `fichas` holds one row per account with the
//! point pools as integer columns (so spends are a single conditional
//! UPDATE) and the document-shaped parts as JSONB.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::entity::ficha::{Carta, Ficha, FichaSheet, Path, PointPools};
use crate::domain::repository::{AccountRepository, FichaRepository};
use crate::domain::value_object::{
    email::Email, point_pool::PointPool, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ficha_exists(&self, account_id: &AccountId) -> AccountResult<bool> {
        let mut conn = self.pool.acquire().await?;
        Ok(ficha_exists(&mut conn, account_id).await?)
    }
}

// ============================================================================
// Shared statements (also used inside other contexts' transactions)
// ============================================================================

/// Insert a ficha row for `account_id`
pub async fn insert_ficha(
    conn: &mut PgConnection,
    account_id: &AccountId,
    ficha: &Ficha,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO fichas (
            user_id,
            version,
            card_points,
            poster_points,
            path_points,
            sheet,
            cartas,
            paths,
            path_connections
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(account_id.as_uuid())
    .bind(ficha.version)
    .bind(ficha.pools.cartas_pontos_disponiveis)
    .bind(ficha.pools.cartazes_pontos_disponiveis)
    .bind(ficha.pools.path_points)
    .bind(Json(&ficha.sheet))
    .bind(Json(&ficha.cartas))
    .bind(Json(&ficha.paths))
    .bind(Json(&ficha.path_connections))
    .execute(conn)
    .await?;

    Ok(())
}

/// Decrement `pool` by one when positive.
///
/// `None` means no row matched: either the pool is empty or there is no ficha.
pub async fn decrement_pool(
    conn: &mut PgConnection,
    account_id: &AccountId,
    pool: PointPool,
) -> Result<Option<i32>, sqlx::Error> {
    // Column names come from a closed enum, never from input
    let sql = format!(
        r#"
        UPDATE fichas SET
            {col} = {col} - 1,
            version = version + 1,
            updated_at = NOW()
        WHERE user_id = $1 AND {col} > 0
        RETURNING {col}
        "#,
        col = pool.column()
    );

    sqlx::query_scalar::<_, i32>(&sql)
        .bind(account_id.as_uuid())
        .fetch_optional(conn)
        .await
}

pub async fn ficha_exists(
    conn: &mut PgConnection,
    account_id: &AccountId,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM fichas WHERE user_id = $1)")
        .bind(account_id.as_uuid())
        .fetch_one(conn)
        .await
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account, ficha: &Ficha) -> AccountResult<()> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .execute(&mut *tx)
        .await;

        match inserted {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AccountError::EmailTaken);
            }
            other => {
                other?;
            }
        }

        insert_ficha(&mut *tx, &account.account_id, ficha).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                username,
                email,
                password_hash,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }
}

// ============================================================================
// Ficha Repository Implementation
// ============================================================================

impl FichaRepository for PgAccountRepository {
    async fn find_by_account(&self, account_id: &AccountId) -> AccountResult<Option<Ficha>> {
        let row = sqlx::query_as::<_, FichaRow>(
            r#"
            SELECT
                version,
                card_points,
                poster_points,
                path_points,
                sheet,
                cartas,
                paths,
                path_connections
            FROM fichas
            WHERE user_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FichaRow::into_ficha))
    }

    async fn save(&self, account_id: &AccountId, ficha: &Ficha) -> AccountResult<Ficha> {
        let new_version = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE fichas SET
                card_points = $3,
                poster_points = $4,
                path_points = $5,
                sheet = $6,
                cartas = $7,
                paths = $8,
                path_connections = $9,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1 AND version = $2
            RETURNING version
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(ficha.version)
        .bind(ficha.pools.cartas_pontos_disponiveis)
        .bind(ficha.pools.cartazes_pontos_disponiveis)
        .bind(ficha.pools.path_points)
        .bind(Json(&ficha.sheet))
        .bind(Json(&ficha.cartas))
        .bind(Json(&ficha.paths))
        .bind(Json(&ficha.path_connections))
        .fetch_optional(&self.pool)
        .await?;

        if let Some(version) = new_version {
            return Ok(Ficha {
                version,
                ..ficha.clone()
            });
        }

        if self.ficha_exists(account_id).await? {
            Err(AccountError::FichaConflict)
        } else {
            Err(AccountError::AccountNotFound)
        }
    }

    async fn spend_point(&self, account_id: &AccountId, pool: PointPool) -> AccountResult<i32> {
        let mut conn = self.pool.acquire().await?;

        if let Some(remaining) = decrement_pool(&mut conn, account_id, pool).await? {
            return Ok(remaining);
        }

        if ficha_exists(&mut conn, account_id).await? {
            Err(AccountError::InsufficientPoints(pool))
        } else {
            Err(AccountError::AccountNotFound)
        }
    }

    async fn replace_paths(
        &self,
        account_id: &AccountId,
        paths: &[Path],
    ) -> AccountResult<Vec<Path>> {
        let stored = sqlx::query_scalar::<_, Json<Vec<Path>>>(
            r#"
            UPDATE fichas SET
                paths = $2,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING paths
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Json(paths))
        .fetch_optional(&self.pool)
        .await?;

        stored
            .map(|Json(paths)| paths)
            .ok_or(AccountError::AccountNotFound)
    }

    async fn replace_connections(
        &self,
        account_id: &AccountId,
        connections: &[Value],
    ) -> AccountResult<Vec<Value>> {
        let stored = sqlx::query_scalar::<_, Json<Vec<Value>>>(
            r#"
            UPDATE fichas SET
                path_connections = $2,
                version = version + 1,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING path_connections
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Json(connections))
        .fetch_optional(&self.pool)
        .await?;

        stored
            .map(|Json(connections)| connections)
            .ok_or(AccountError::AccountNotFound)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_account(self) -> AccountResult<Account> {
        Ok(Account {
            account_id: AccountId::from_uuid(self.user_id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FichaRow {
    version: i64,
    card_points: i32,
    poster_points: i32,
    path_points: i32,
    sheet: Json<FichaSheet>,
    cartas: Json<Vec<Carta>>,
    paths: Json<Vec<Path>>,
    path_connections: Json<Vec<Value>>,
}

impl FichaRow {
    fn into_ficha(self) -> Ficha {
        Ficha {
            sheet: self.sheet.0,
            cartas: self.cartas.0,
            paths: self.paths.0,
            path_connections: self.path_connections.0,
            pools: PointPools {
                cartas_pontos_disponiveis: self.card_points,
                cartazes_pontos_disponiveis: self.poster_points,
                path_points: self.path_points,
            },
            version: self.version,
        }
    }
}
