//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserRole;

use super::kind::NotificationKind;
use super::metadata::NotificationMetadata;
use super::priority::NotificationPriority;
use super::status::NotificationStatus;

/// A notification delivered to exactly one recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier, assigned by the store.
    pub id: Uuid,
    /// The kind of event this notification describes.
    pub kind: NotificationKind,
    /// Fully-resolved title (post placeholder substitution).
    pub title: String,
    /// Fully-resolved body text (post placeholder substitution).
    pub message: String,
    /// Display priority.
    pub priority: NotificationPriority,
    /// Read state; starts at `Unread`.
    pub status: NotificationStatus,
    /// The recipient user. Only this principal may read or mutate the record.
    pub recipient_id: Uuid,
    /// Role snapshot of the recipient at creation time.
    pub recipient_role: Option<UserRole>,
    /// When the notification was created, assigned by the store.
    pub created_at: DateTime<Utc>,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// Advisory expiry; no automatic sweep acts on it.
    pub expires_at: Option<DateTime<Utc>>,
    /// Structured event context.
    #[serde(default)]
    pub metadata: NotificationMetadata,
}

impl Notification {
    /// Check if the notification has not yet been read.
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }

    /// Check if the notification is past its advisory expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp <= Utc::now()).unwrap_or(false)
    }
}

/// Data required to persist a new notification.
///
/// The store assigns `id` and `created_at` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The kind of event this notification describes.
    pub kind: NotificationKind,
    /// Fully-resolved title.
    pub title: String,
    /// Fully-resolved body text.
    pub message: String,
    /// Display priority.
    pub priority: NotificationPriority,
    /// The recipient user.
    pub recipient_id: Uuid,
    /// Role snapshot of the recipient at creation time.
    pub recipient_role: Option<UserRole>,
    /// Advisory expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Structured event context.
    pub metadata: NotificationMetadata,
}
