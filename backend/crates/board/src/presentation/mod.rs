//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BoardAppState;
pub use router::board_router;
