//! Create Posting Use Case
//!
//! Validates the posting, then spends a poster point and stores it in one
//! atomic step.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::cartaz::Cartaz;
use crate::domain::repository::CartazRepository;
use crate::error::BoardResult;

/// Create posting input
pub struct CreatePostingInput {
    pub tipo: String,
    pub titulo: String,
    pub recompensa: String,
    pub descricao: String,
}

pub struct CreatePostingUseCase<R>
where
    R: CartazRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostingUseCase<R>
where
    R: CartazRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, author_id: AccountId, input: CreatePostingInput) -> BoardResult<Cartaz> {
        let cartaz = Cartaz::new(
            author_id,
            &input.tipo,
            &input.titulo,
            &input.recompensa,
            &input.descricao,
        )?;

        let remaining = self.repo.publish(&cartaz).await?;

        tracing::info!(
            cartaz_id = %cartaz.cartaz_id,
            author_id = %author_id,
            poster_points_left = remaining,
            "Cartaz published"
        );

        Ok(cartaz)
    }
}
