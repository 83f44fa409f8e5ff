//! List Postings Use Case

use std::sync::Arc;

use crate::domain::cartaz::Listing;
use crate::domain::repository::CartazRepository;
use crate::error::BoardResult;

pub struct ListPostingsUseCase<R>
where
    R: CartazRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostingsUseCase<R>
where
    R: CartazRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> BoardResult<Vec<Listing>> {
        self.repo.list_with_authors().await
    }
}
