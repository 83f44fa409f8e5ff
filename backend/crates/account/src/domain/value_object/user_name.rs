//! User Name Value Object
//!
//! Display name chosen at registration. Not unique and not used for login.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccountError, AccountResult};

/// Maximum user name length in characters
pub const USER_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AccountResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(AccountError::MissingFields);
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH || name.chars().any(char::is_control) {
            return Err(AccountError::InvalidUserName);
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
