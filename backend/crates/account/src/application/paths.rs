//! Replace Paths Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::ficha::Path;
use crate::domain::repository::FichaRepository;
use crate::error::AccountResult;

/// Overwrites the caller's paths; an empty list clears them.
pub struct ReplacePathsUseCase<R>
where
    R: FichaRepository,
{
    repo: Arc<R>,
}

impl<R> ReplacePathsUseCase<R>
where
    R: FichaRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: AccountId, paths: Vec<Path>) -> AccountResult<Vec<Path>> {
        let stored = self.repo.replace_paths(&account_id, &paths).await?;

        tracing::info!(account_id = %account_id, paths = stored.len(), "Paths replaced");

        Ok(stored)
    }
}
