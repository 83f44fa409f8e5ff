//! Account Entity
//!
//! Credentials and public identity of a player. The ficha is a separate
//! aggregate with the same lifetime (see [`super::ficha::Ficha`]).

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub username: UserName,
    /// Unique login identifier
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            account_id: AccountId::new(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
