//! Spend Point Use Case
//!
//! Spends one point from a pool of the caller's ficha.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::repository::FichaRepository;
use crate::domain::value_object::point_pool::PointPool;
use crate::error::AccountResult;

/// Spend point use case
pub struct SpendPointUseCase<R>
where
    R: FichaRepository,
{
    repo: Arc<R>,
}

impl<R> SpendPointUseCase<R>
where
    R: FichaRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the points left in `pool`.
    pub async fn execute(&self, account_id: AccountId, pool: PointPool) -> AccountResult<i32> {
        let remaining = self.repo.spend_point(&account_id, pool).await?;

        tracing::info!(
            account_id = %account_id,
            pool = %pool,
            remaining,
            "Point spent"
        );

        Ok(remaining)
    }
}
