//! Domain Layer

pub mod cartaz;
pub mod repository;

pub use cartaz::{Author, Cartaz, Listing};
pub use repository::{BoardStore, CartazRepository};
