//! User service
//!
//! Registers account holders and resolves caller-supplied references.

use crate::error::{ReportError, ReportResult};
use crate::models::{User, UserRef};
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    pub fn create(&self, email: &str, name: Option<&str>) -> ReportResult<User> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ReportError::Validation(format!(
                "Invalid email address: '{}'",
                email
            )));
        }

        if self.storage.users.get_by_email(email)?.is_some() {
            return Err(ReportError::Duplicate {
                entity_type: "User",
                identifier: email.to_string(),
            });
        }

        let mut user = User::new(self.storage.users.next_id()?, email);
        if let Some(name) = name {
            user.name = name.trim().to_string();
        }

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        Ok(user)
    }

    /// Find a user by id or email
    pub fn find(&self, user: &UserRef) -> ReportResult<User> {
        let found = match user {
            UserRef::Id(id) => self.storage.users.get(*id)?,
            UserRef::Email(email) => self.storage.users.get_by_email(email)?,
        };
        found.ok_or_else(|| ReportError::user_not_found(user.to_string()))
    }

    /// All registered users
    pub fn list(&self) -> ReportResult<Vec<User>> {
        self.storage.users.get_all()
    }
}
