//! Repository Traits

use crate::domain::cartaz::{Cartaz, Listing};
use crate::error::BoardResult;

/// Cartaz repository trait
#[trait_variant::make(CartazRepository: Send)]
pub trait LocalCartazRepository {
    /// All postings in publication order, with author usernames
    async fn list_with_authors(&self) -> BoardResult<Vec<Listing>>;

    /// Spend one poster point of the author and store the posting, atomically.
    ///
    /// Returns the author's remaining poster points. On `InsufficientPoints`
    /// or `AuthorNotFound` nothing is written.
    async fn publish(&self, cartaz: &Cartaz) -> BoardResult<i32>;
}

/// Everything the board handlers need from a store
pub trait BoardStore: CartazRepository + Clone + Send + Sync + 'static {}

impl<T> BoardStore for T where T: CartazRepository + Clone + Send + Sync + 'static {}
