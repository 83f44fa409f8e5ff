//! Register Use Case
//!
//! Creates an account and its zero-valued ficha.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::AccountConfig;
use crate::domain::entity::{account::Account, ficha::Ficha};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub account_id: AccountId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        if [&input.username, &input.email, &input.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AccountError::MissingFields);
        }

        let username = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Cheap pre-check before paying for the hash; the unique index still decides
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AccountError::Internal(e.to_string()))??;

        let account = Account::new(username, email, password_hash);
        self.repo.create(&account, &Ficha::new()).await?;

        tracing::info!(
            account_id = %account.account_id,
            username = %account.username,
            "Account registered"
        );

        Ok(RegisterOutput {
            account_id: account.account_id,
        })
    }
}
