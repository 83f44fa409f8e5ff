//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBoardStore;
pub use postgres::PgCartazRepository;
