//! API DTOs

use kernel::id::{AccountId, CartazId};
use serde::{Deserialize, Serialize};

use crate::domain::cartaz::{Author, Cartaz, Listing};

/// Missing keys deserialize as empty and fail validation as missing fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostingRequest {
    pub tipo: String,
    pub titulo: String,
    pub recompensa: String,
    pub descricao: String,
}

/// A freshly created posting, author as a bare id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingResponse {
    #[serde(rename = "_id")]
    pub id: CartazId,
    pub user_id: AccountId,
    pub tipo: String,
    pub titulo: String,
    pub recompensa: String,
    pub descricao: String,
}

impl From<Cartaz> for PostingResponse {
    fn from(cartaz: Cartaz) -> Self {
        Self {
            id: cartaz.cartaz_id,
            user_id: cartaz.author_id,
            tipo: cartaz.tipo,
            titulo: cartaz.titulo,
            recompensa: cartaz.recompensa,
            descricao: cartaz.descricao,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    #[serde(rename = "_id")]
    pub id: AccountId,
    pub username: String,
}

impl From<Author> for AuthorView {
    fn from(author: Author) -> Self {
        Self {
            id: author.account_id,
            username: author.username,
        }
    }
}

/// A listed posting. `userId` is the populated author, or `null` when the
/// account no longer exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedPosting {
    #[serde(rename = "_id")]
    pub id: CartazId,
    pub user_id: Option<AuthorView>,
    pub tipo: String,
    pub titulo: String,
    pub recompensa: String,
    pub descricao: String,
}

impl From<Listing> for ListedPosting {
    fn from(listing: Listing) -> Self {
        let Listing { cartaz, author } = listing;
        Self {
            id: cartaz.cartaz_id,
            user_id: author.map(AuthorView::from),
            tipo: cartaz.tipo,
            titulo: cartaz.titulo,
            recompensa: cartaz.recompensa,
            descricao: cartaz.descricao,
        }
    }
}
