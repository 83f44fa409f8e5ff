//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account and ficha entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with email + password (Argon2id)
//! - Login issuing a one-day bearer token
//! - One ficha (character sheet) per account, created with the account
//! - Point pools spent one at a time with an atomic decrement-if-positive
//! - Paths and path connections stored with the ficha

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::memory::InMemoryAccountStore;
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::account_router;
