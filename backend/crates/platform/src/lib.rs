//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the bounded contexts:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (HS256 JWT)
//! - Bearer authentication extractor for axum

pub mod bearer;
pub mod password;
pub mod token;
