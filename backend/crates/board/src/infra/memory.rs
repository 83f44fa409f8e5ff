//! In-Memory Repository Implementation
//!
//! Shares the account store so a posting and its point spend see the same
//! fichas.

use std::sync::Arc;

use account::InMemoryAccountStore;
use account::domain::repository::{AccountRepository, FichaRepository};
use account::domain::value_object::point_pool::PointPool;
use tokio::sync::Mutex;

use crate::domain::cartaz::{Author, Cartaz, Listing};
use crate::domain::repository::CartazRepository;
use crate::error::BoardResult;

#[derive(Clone)]
pub struct InMemoryBoardStore {
    accounts: InMemoryAccountStore,
    postings: Arc<Mutex<Vec<Cartaz>>>,
}

impl InMemoryBoardStore {
    pub fn new(accounts: InMemoryAccountStore) -> Self {
        Self {
            accounts,
            postings: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CartazRepository for InMemoryBoardStore {
    async fn list_with_authors(&self) -> BoardResult<Vec<Listing>> {
        let postings = self.postings.lock().await.clone();

        let mut listings = Vec::with_capacity(postings.len());
        for cartaz in postings {
            let author = self
                .accounts
                .find_by_id(&cartaz.author_id)
                .await?
                .map(|account| Author {
                    account_id: account.account_id,
                    username: account.username.to_string(),
                });
            listings.push(Listing { cartaz, author });
        }

        Ok(listings)
    }

    async fn publish(&self, cartaz: &Cartaz) -> BoardResult<i32> {
        // Held across the spend so the decrement and the insert are one step
        let mut postings = self.postings.lock().await;

        let remaining = self
            .accounts
            .spend_point(&cartaz.author_id, PointPool::Posters)
            .await?;
        postings.push(cartaz.clone());

        Ok(remaining)
    }
}
