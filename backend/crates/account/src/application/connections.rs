//! Save Connections Use Case

use std::sync::Arc;

use kernel::id::AccountId;
use serde_json::Value;

use crate::domain::repository::FichaRepository;
use crate::error::AccountResult;

/// Stores the caller's path connections verbatim.
pub struct SaveConnectionsUseCase<R>
where
    R: FichaRepository,
{
    repo: Arc<R>,
}

impl<R> SaveConnectionsUseCase<R>
where
    R: FichaRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        account_id: AccountId,
        connections: Vec<Value>,
    ) -> AccountResult<Vec<Value>> {
        let stored = self
            .repo
            .replace_connections(&account_id, &connections)
            .await?;

        tracing::info!(
            account_id = %account_id,
            connections = stored.len(),
            "Path connections saved"
        );

        Ok(stored)
    }
}
