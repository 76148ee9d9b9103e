//! User model and user references
//!
//! A report is always generated for a single account holder. Callers may
//! identify the holder by numeric id or by email address.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::UserId;

/// A registered account holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: String::new(),
        }
    }

    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// How a caller identifies the account holder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(UserId),
    Email(String),
}

impl UserRef {
    pub fn email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id.value()),
            Self::Email(email) => write!(f, "email: {}", email),
        }
    }
}

impl FromStr for UserRef {
    type Err = std::convert::Infallible;

    /// Digits (optionally prefixed `usr-`) are ids, anything else an email
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<UserId>() {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Ok(Self::Email(s.to_string())),
        }
    }
}

impl From<UserId> for UserRef {
    fn from(id: UserId) -> Self {
        Self::Id(id)
    }
}
