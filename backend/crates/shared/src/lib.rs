//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error type, error kinds and result alias
//! - Typed identifiers shared by the account and board contexts
//! - JSON/query extractors whose rejections speak `AppError`
//!
//! Only things with the same meaning in every bounded context live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
#[cfg(feature = "axum")]
pub mod extract;
