//! User repository for JSON storage
//!
//! Manages loading and saving account holders to users.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ReportError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    users: RwLock<BTreeMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), ReportError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut users = self
            .users
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.clear();
        for user in file_data.users {
            users.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), ReportError> {
        let users = self
            .users
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = UserData {
            users: users.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, ReportError> {
        let users = self
            .users
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.get(&id).cloned())
    }

    /// Find a user by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, ReportError> {
        let users = self
            .users
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.values().find(|u| u.has_email(email)).cloned())
    }

    /// All users ordered by id
    pub fn get_all(&self) -> Result<Vec<User>, ReportError> {
        let users = self
            .users
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.values().cloned().collect())
    }

    /// The id a newly registered user should receive
    pub fn next_id(&self) -> Result<UserId, ReportError> {
        let users = self
            .users
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(UserId::new(1)))
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), ReportError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        users.insert(user.id, user);
        Ok(())
    }
}
