//! In-memory user directory.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use vendora_core::AppResult;
use vendora_entity::{User, UserRole};

use crate::UserDirectory;

/// In-memory implementation of [`UserDirectory`].
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    /// User id → directory record.
    users: DashMap<Uuid, User>,
}

impl MemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub fn upsert(&self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Remove a user record.
    pub fn remove(&self, user_id: Uuid) {
        self.users.remove(&user_id);
    }

    /// Number of directory records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_ids_by_roles(&self, roles: &[UserRole]) -> AppResult<Vec<Uuid>> {
        Ok(self
            .users
            .iter()
            .filter(|entry| roles.contains(&entry.role))
            .map(|entry| entry.id)
            .collect())
    }
}
