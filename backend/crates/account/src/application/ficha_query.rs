//! Ficha Query Use Case
//!
//! Read-only access to a ficha, either by the caller's identity or by the
//! account email.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::ficha::Ficha;
use crate::domain::repository::{AccountRepository, FichaRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

pub struct FichaQueryUseCase<R>
where
    R: AccountRepository + FichaRepository,
{
    repo: Arc<R>,
}

impl<R> FichaQueryUseCase<R>
where
    R: AccountRepository + FichaRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An email that cannot belong to any account is simply not found.
    pub async fn by_email(&self, email: &str) -> AccountResult<Ficha> {
        let email = Email::new(email).map_err(|_| AccountError::AccountNotFound)?;
        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        self.by_account(&account.account_id).await
    }

    pub async fn by_account(&self, account_id: &AccountId) -> AccountResult<Ficha> {
        self.repo
            .find_by_account(account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }
}
