//! In-Memory Repository Implementation
//!
//! Backs the tests and database-less development runs. All state sits
//! behind one async mutex, so every operation is atomic.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::AccountId;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::entity::account::Account;
use crate::domain::entity::ficha::{Ficha, Path};
use crate::domain::repository::{AccountRepository, FichaRepository};
use crate::domain::value_object::{email::Email, point_pool::PointPool};
use crate::error::{AccountError, AccountResult};

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<AccountId, Account>,
    by_email: HashMap<Email, AccountId>,
    fichas: HashMap<AccountId, Ficha>,
}

impl MemoryState {
    fn ficha_mut(&mut self, account_id: &AccountId) -> AccountResult<&mut Ficha> {
        self.fichas
            .get_mut(account_id)
            .ok_or(AccountError::AccountNotFound)
    }
}

/// Process-local account store
#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountStore {
    async fn create(&self, account: &Account, ficha: &Ficha) -> AccountResult<()> {
        let mut state = self.state.lock().await;

        if state.by_email.contains_key(&account.email) {
            return Err(AccountError::EmailTaken);
        }

        state
            .by_email
            .insert(account.email.clone(), account.account_id);
        state.accounts.insert(account.account_id, account.clone());
        state.fichas.insert(account.account_id, ficha.clone());

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state
            .by_email
            .get(email)
            .and_then(|id| state.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        Ok(self.state.lock().await.accounts.get(account_id).cloned())
    }
}

impl FichaRepository for InMemoryAccountStore {
    async fn find_by_account(&self, account_id: &AccountId) -> AccountResult<Option<Ficha>> {
        Ok(self.state.lock().await.fichas.get(account_id).cloned())
    }

    async fn save(&self, account_id: &AccountId, ficha: &Ficha) -> AccountResult<Ficha> {
        let mut state = self.state.lock().await;
        let stored = state.ficha_mut(account_id)?;

        if stored.version != ficha.version {
            return Err(AccountError::FichaConflict);
        }

        *stored = Ficha {
            version: ficha.version + 1,
            ..ficha.clone()
        };
        Ok(stored.clone())
    }

    async fn spend_point(&self, account_id: &AccountId, pool: PointPool) -> AccountResult<i32> {
        let mut state = self.state.lock().await;
        let ficha = state.ficha_mut(account_id)?;

        let remaining = ficha.pools.spend(pool)?;
        ficha.version += 1;
        Ok(remaining)
    }

    async fn replace_paths(
        &self,
        account_id: &AccountId,
        paths: &[Path],
    ) -> AccountResult<Vec<Path>> {
        let mut state = self.state.lock().await;
        let ficha = state.ficha_mut(account_id)?;

        ficha.paths = paths.to_vec();
        ficha.version += 1;
        Ok(ficha.paths.clone())
    }

    async fn replace_connections(
        &self,
        account_id: &AccountId,
        connections: &[Value],
    ) -> AccountResult<Vec<Value>> {
        let mut state = self.state.lock().await;
        let ficha = state.ficha_mut(account_id)?;

        ficha.path_connections = connections.to_vec();
        ficha.version += 1;
        Ok(ficha.path_connections.clone())
    }
}
