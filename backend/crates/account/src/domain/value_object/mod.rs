//! Value Object Module

pub mod email;
pub mod point_pool;
pub mod user_name;
pub mod user_password;
