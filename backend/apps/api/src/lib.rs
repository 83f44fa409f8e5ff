//! API server assembly
//!
//! Configuration, router composition and middleware. `main.rs` only loads
//! the environment, connects the store and serves.

pub mod app;
pub mod config;
pub mod health;


pub use app::{Backend, build_router};
pub use config::{ApiConfig, ConfigError};
