//! Public Board Backend Module
//!
//! "Cartazes públicos": requests players post for everyone to see. Posting
//! costs one poster point from the author's ficha.
//!
//! Clean Architecture structure:
//! - `domain/` - Cartaz entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{BoardError, BoardResult};
pub use infra::memory::InMemoryBoardStore;
pub use infra::postgres::PgCartazRepository;
pub use presentation::router::board_router;
