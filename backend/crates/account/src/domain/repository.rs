//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use kernel::id::AccountId;
use serde_json::Value;

use crate::domain::entity::account::Account;
use crate::domain::entity::ficha::{Ficha, Path};
use crate::domain::value_object::{email::Email, point_pool::PointPool};
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account together with its ficha, atomically.
    ///
    /// Fails with `EmailTaken` when the email already exists.
    async fn create(&self, account: &Account, ficha: &Ficha) -> AccountResult<()>;

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;
}

/// Ficha repository trait
///
/// Every write bumps the ficha version.
#[trait_variant::make(FichaRepository: Send)]
pub trait LocalFichaRepository {
    async fn find_by_account(&self, account_id: &AccountId) -> AccountResult<Option<Ficha>>;

    /// Replace the stored ficha if its version still equals `ficha.version`.
    ///
    /// Returns the saved ficha with its new version. A stale version fails
    /// with `FichaConflict`, a missing account with `AccountNotFound`.
    async fn save(&self, account_id: &AccountId, ficha: &Ficha) -> AccountResult<Ficha>;

    /// Atomically decrement `pool` by one if it is positive.
    ///
    /// Returns the remaining points, `InsufficientPoints` when the pool is
    /// zero, `AccountNotFound` when there is no ficha.
    async fn spend_point(&self, account_id: &AccountId, pool: PointPool) -> AccountResult<i32>;

    /// Overwrite the paths list unconditionally
    async fn replace_paths(&self, account_id: &AccountId, paths: &[Path])
    -> AccountResult<Vec<Path>>;

    /// Overwrite the path connections unconditionally
    async fn replace_connections(
        &self,
        account_id: &AccountId,
        connections: &[Value],
    ) -> AccountResult<Vec<Value>>;
}

/// Everything the account handlers need from a store
pub trait AccountStore:
    AccountRepository + FichaRepository + Clone + Send + Sync + 'static
{
}

impl<T> AccountStore for T where
    T: AccountRepository + FichaRepository + Clone + Send + Sync + 'static
{
}
