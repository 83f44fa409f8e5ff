//! Update Ficha Use Case
//!
//! Shallow merge of a partial ficha into the stored one.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::ficha::{Ficha, FichaPatch};
use crate::domain::repository::FichaRepository;
use crate::error::{AccountError, AccountResult};

/// Update ficha use case
pub struct UpdateFichaUseCase<R>
where
    R: FichaRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateFichaUseCase<R>
where
    R: FichaRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the merged ficha as stored.
    ///
    /// The save is conditional on the version read here, so a concurrent
    /// spend between read and write surfaces as `FichaConflict`.
    pub async fn execute(&self, account_id: AccountId, patch: FichaPatch) -> AccountResult<Ficha> {
        patch.validate()?;

        let mut ficha = self
            .repo
            .find_by_account(&account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        patch.apply_to(&mut ficha)?;
        let saved = self.repo.save(&account_id, &ficha).await?;

        tracing::info!(
            account_id = %account_id,
            version = saved.version,
            "Ficha updated"
        );

        Ok(saved)
    }
}
