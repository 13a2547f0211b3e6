//! # vendora-store
//!
//! The document-store boundary of the Vendora notification core.
//!
//! The hosted document database is an external collaborator; this crate
//! defines the traits the notification service consumes
//! ([`NotificationStore`], [`UserDirectory`]), the live-feed types
//! ([`NotificationFeed`], [`Unsubscribe`]), and an in-memory reference
//! backend used by tests and embedders without a hosted store.
//!
//! Each individual write is atomic; multi-record operations are composed
//! at the service layer and carry no cross-record atomicity.

pub mod feed;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use vendora_core::AppResult;
use vendora_entity::{NewNotification, Notification, UserRole};

pub use feed::{NotificationFeed, Unsubscribe};
pub use memory::{MemoryNotificationStore, MemoryUserDirectory};

/// Persistence operations on the `notifications` collection.
///
/// No ownership checks happen at this layer: callers pass bare ids and the
/// embedding request layer must verify that the current user is the
/// recipient before mutating or deleting.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Persist a new notification. The store assigns `id` and
    /// `created_at` and returns the completed record.
    async fn insert(&self, notification: NewNotification) -> AppResult<Notification>;

    /// List notifications for a recipient, newest first, capped at
    /// `limit`. When `unread_only`, only unread records are returned.
    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        limit: usize,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>>;

    /// Set a notification's status to read and stamp `read_at`.
    /// A missing id is a no-op.
    async fn mark_read(&self, notification_id: Uuid, read_at: DateTime<Utc>) -> AppResult<()>;

    /// Hard-delete a notification. A missing id is a no-op.
    async fn delete(&self, notification_id: Uuid) -> AppResult<()>;

    /// Count unread notifications for a recipient.
    async fn count_unread(&self, recipient_id: Uuid) -> AppResult<u64>;

    /// Open a live feed over the recipient's top-`limit` newest
    /// notifications. Every relevant change pushes a full snapshot; an
    /// initial snapshot is delivered on subscription. Dropping or
    /// cancelling the feed detaches the watcher.
    async fn subscribe(&self, recipient_id: Uuid, limit: usize) -> AppResult<NotificationFeed>;
}

/// Read-only lookups against the `users` collection.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Resolve the ids of all users whose stored role is in `roles`.
    ///
    /// This is a point-in-time snapshot: concurrent role changes may or
    /// may not be reflected.
    async fn find_ids_by_roles(&self, roles: &[UserRole]) -> AppResult<Vec<Uuid>>;
}
