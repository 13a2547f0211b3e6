//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use vendora_core::config::notifications::NotificationsConfig;
use vendora_entity::{User, UserRole};
use vendora_notify::{NotificationService, NotificationTriggers};
use vendora_store::{MemoryNotificationStore, MemoryUserDirectory};

/// Test application context: in-memory stores wired into the service.
pub struct TestApp {
    /// The notification collection, for direct assertions.
    pub store: Arc<MemoryNotificationStore>,
    /// The user directory, for seeding role members.
    pub directory: Arc<MemoryUserDirectory>,
    /// The service under test.
    pub service: Arc<NotificationService>,
    /// The trigger set under test.
    pub triggers: NotificationTriggers,
}

impl TestApp {
    /// Create a fresh application context.
    pub fn new() -> Self {
        let config = NotificationsConfig::default();
        let store = Arc::new(MemoryNotificationStore::with_max_per_user(
            config.max_stored_per_user,
        ));
        let directory = Arc::new(MemoryUserDirectory::new());
        let service = Arc::new(NotificationService::new(
            store.clone(),
            directory.clone(),
            config,
        ));
        let triggers = NotificationTriggers::new(service.clone());
        Self {
            store,
            directory,
            service,
            triggers,
        }
    }

    /// Seed a directory user with the given role and return its id.
    pub fn add_user(&self, display_name: &str, role: UserRole) -> Uuid {
        let id = Uuid::new_v4();
        self.directory.upsert(User {
            id,
            display_name: display_name.to_string(),
            email: None,
            role,
            created_at: Utc::now(),
        });
        id
    }
}
