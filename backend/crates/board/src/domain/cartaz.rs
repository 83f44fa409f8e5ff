//! Cartaz Entity
//!
//! A public board posting. Immutable once published.

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, CartazId};

use crate::error::{BoardError, BoardResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartaz {
    pub cartaz_id: CartazId,
    pub author_id: AccountId,
    pub tipo: String,
    pub titulo: String,
    pub recompensa: String,
    pub descricao: String,
    pub created_at: DateTime<Utc>,
}

impl Cartaz {
    /// Build a new posting; every text field must be non-blank.
    pub fn new(
        author_id: AccountId,
        tipo: &str,
        titulo: &str,
        recompensa: &str,
        descricao: &str,
    ) -> BoardResult<Self> {
        let fields = [tipo, titulo, recompensa, descricao].map(str::trim);
        if fields.iter().any(|f| f.is_empty()) {
            return Err(BoardError::MissingFields);
        }
        let [tipo, titulo, recompensa, descricao] = fields.map(str::to_string);

        Ok(Self {
            cartaz_id: CartazId::new(),
            author_id,
            tipo,
            titulo,
            recompensa,
            descricao,
            created_at: Utc::now(),
        })
    }
}

/// Public identity of a posting's author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub account_id: AccountId,
    pub username: String,
}

/// A posting with its author resolved; `None` when the account is gone
#[derive(Debug, Clone)]
pub struct Listing {
    pub cartaz: Cartaz,
    pub author: Option<Author>,
}
