//! Login Use Case
//!
//! Verifies email + password and issues a one-day bearer token.

use std::sync::Arc;

use platform::token::TokenKeys;

use crate::application::config::AccountConfig;
use crate::domain::entity::{account::Account, ficha::Ficha};
use crate::domain::repository::{AccountRepository, FichaRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub account: Account,
    pub ficha: Ficha,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository + FichaRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
    tokens: Arc<TokenKeys>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository + FichaRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>, tokens: Arc<TokenKeys>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let email = Email::new(&input.email)?;
        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AccountError::InvalidCredentials)?;

        let password_hash = account.password_hash.clone();
        let pepper = self.config.password_pepper.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AccountError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AccountError::InvalidCredentials);
        }

        let ficha = match self.repo.find_by_account(&account.account_id).await? {
            Some(ficha) => ficha,
            None => {
                tracing::warn!(account_id = %account.account_id, "Account has no ficha");
                Ficha::new()
            }
        };

        let issued = self.tokens.issue(account.account_id.into_uuid())?;

        tracing::info!(
            account_id = %account.account_id,
            expires_at = issued.claims.exp,
            "Account logged in"
        );

        Ok(LoginOutput {
            token: issued.token,
            account,
            ficha,
        })
    }
}
