//! PostgreSQL Repository Implementation

use account::domain::value_object::point_pool::PointPool;
use account::infra::postgres::{decrement_pool, ficha_exists};
use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CartazId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::cartaz::{Author, Cartaz, Listing};
use crate::domain::repository::CartazRepository;
use crate::error::{BoardError, BoardResult};

/// PostgreSQL-backed board repository
#[derive(Clone)]
pub struct PgCartazRepository {
    pool: PgPool,
}

impl PgCartazRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CartazRepository for PgCartazRepository {
    async fn list_with_authors(&self) -> BoardResult<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT
                c.cartaz_id,
                c.user_id,
                c.tipo,
                c.titulo,
                c.recompensa,
                c.descricao,
                c.created_at,
                u.username
            FROM cartazes_publicos c
            LEFT JOIN users u ON u.user_id = c.user_id
            ORDER BY c.created_at, c.cartaz_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn publish(&self, cartaz: &Cartaz) -> BoardResult<i32> {
        let mut tx = self.pool.begin().await?;

        let Some(remaining) =
            decrement_pool(&mut *tx, &cartaz.author_id, PointPool::Posters).await?
        else {
            // Dropping the transaction rolls it back
            return if ficha_exists(&mut *tx, &cartaz.author_id).await? {
                Err(BoardError::InsufficientPoints)
            } else {
                Err(BoardError::AuthorNotFound)
            };
        };

        sqlx::query(
            r#"
            INSERT INTO cartazes_publicos (
                cartaz_id,
                user_id,
                tipo,
                titulo,
                recompensa,
                descricao,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(cartaz.cartaz_id.as_uuid())
        .bind(cartaz.author_id.as_uuid())
        .bind(&cartaz.tipo)
        .bind(&cartaz.titulo)
        .bind(&cartaz.recompensa)
        .bind(&cartaz.descricao)
        .bind(cartaz.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(remaining)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ListingRow {
    cartaz_id: Uuid,
    user_id: Uuid,
    tipo: String,
    titulo: String,
    recompensa: String,
    descricao: String,
    created_at: DateTime<Utc>,
    username: Option<String>,
}

impl ListingRow {
    fn into_listing(self) -> Listing {
        let author_id = AccountId::from_uuid(self.user_id);
        Listing {
            author: self.username.map(|username| Author {
                account_id: author_id,
                username,
            }),
            cartaz: Cartaz {
                cartaz_id: CartazId::from_uuid(self.cartaz_id),
                author_id,
                tipo: self.tipo,
                titulo: self.titulo,
                recompensa: self.recompensa,
                descricao: self.descricao,
                created_at: self.created_at,
            },
        }
    }
}
