//! The notification service: creation, templating, fan-out, read state,
//! and live subscription.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use vendora_core::config::notifications::NotificationsConfig;
use vendora_core::{AppError, AppResult};
use vendora_entity::{
    NewNotification, Notification, NotificationKind, NotificationMetadata, NotificationPriority,
    UserRole,
};
use vendora_store::{NotificationFeed, NotificationStore, UserDirectory};

use crate::template::{render, template_for};

/// Optional per-call overrides for notification creation.
///
/// `title`/`message`, when supplied, replace the templated text outright
/// (no placeholder substitution is applied to them). `priority` replaces
/// the template default. `metadata` feeds placeholder substitution and is
/// persisted on the record.
#[derive(Debug, Clone, Default)]
pub struct CreateOverrides {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement body text.
    pub message: Option<String>,
    /// Replacement priority.
    pub priority: Option<NotificationPriority>,
    /// Role snapshot to denormalize onto the record.
    pub recipient_role: Option<UserRole>,
    /// Advisory expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Event context; absent fields substitute as empty strings.
    pub metadata: NotificationMetadata,
}

/// Creates, queries, and mutates user notifications.
///
/// Constructed once per process and shared behind an `Arc`. All
/// operations delegate concurrency safety to the store's per-record
/// atomicity; the service holds no mutable state.
///
/// The service performs no ownership checks: the embedding request layer
/// must verify that the current user is the recipient before calling
/// [`mark_as_read`](Self::mark_as_read) or
/// [`delete_notification`](Self::delete_notification).
pub struct NotificationService {
    /// Notification collection.
    store: Arc<dyn NotificationStore>,
    /// User directory, for role-broadcast recipient resolution.
    users: Arc<dyn UserDirectory>,
    /// Service settings.
    config: NotificationsConfig,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        users: Arc<dyn UserDirectory>,
        config: NotificationsConfig,
    ) -> Self {
        Self {
            store,
            users,
            config,
        }
    }

    /// Create a single notification and return its id.
    ///
    /// Resolves the template for `kind`, substitutes placeholder tokens
    /// from `overrides.metadata`, and persists the record with status
    /// unread. Storage failures propagate to the caller; triggers decide
    /// whether to swallow them.
    pub async fn create_notification(
        &self,
        recipient_id: Uuid,
        kind: NotificationKind,
        overrides: CreateOverrides,
    ) -> AppResult<Uuid> {
        if recipient_id.is_nil() {
            return Err(AppError::validation("Recipient id must not be nil"));
        }

        let CreateOverrides {
            title,
            message,
            priority,
            recipient_role,
            expires_at,
            metadata,
        } = overrides;

        let template = template_for(kind);
        let title = title.unwrap_or_else(|| render(template.title, &metadata));
        let message = message.unwrap_or_else(|| render(template.message, &metadata));
        let priority = priority.unwrap_or(template.priority);

        let created = self
            .store
            .insert(NewNotification {
                kind,
                title,
                message,
                priority,
                recipient_id,
                recipient_role,
                expires_at,
                metadata,
            })
            .await?;

        debug!(notification_id = %created.id, %kind, recipient = %recipient_id, "Notification created");
        Ok(created.id)
    }

    /// Create one notification per recipient, concurrently.
    ///
    /// Not transactional: writes that succeed before a failure stand. The
    /// returned error reports how many recipients were not reached.
    pub async fn create_bulk_notifications(
        &self,
        recipient_ids: &[Uuid],
        kind: NotificationKind,
        overrides: CreateOverrides,
    ) -> AppResult<()> {
        let results = join_all(
            recipient_ids
                .iter()
                .map(|id| self.create_notification(*id, kind, overrides.clone())),
        )
        .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(%kind, failed, total = results.len(), "Bulk notification fan-out partially failed");
            return Err(AppError::storage(format!(
                "{failed} of {} notification writes failed",
                results.len()
            )));
        }
        Ok(())
    }

    /// Broadcast a notification to every user currently holding one of
    /// `roles`.
    ///
    /// Role membership is resolved once, at call time; users whose role
    /// changes concurrently may or may not be included.
    pub async fn create_role_notification(
        &self,
        roles: &[UserRole],
        kind: NotificationKind,
        overrides: CreateOverrides,
    ) -> AppResult<()> {
        let recipient_ids = self.users.find_ids_by_roles(roles).await?;
        if recipient_ids.is_empty() {
            debug!(%kind, ?roles, "Role broadcast matched no users");
            return Ok(());
        }
        self.create_bulk_notifications(&recipient_ids, kind, overrides)
            .await
    }

    /// List a user's notifications, newest first.
    ///
    /// `limit` defaults to the configured query limit.
    pub async fn get_user_notifications(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        let limit = limit.unwrap_or(self.config.default_query_limit);
        self.store
            .find_by_recipient(user_id, limit, unread_only)
            .await
    }

    /// Mark a notification as read and stamp `read_at`.
    ///
    /// Idempotent in effect: a second call re-stamps the same fields.
    pub async fn mark_as_read(&self, notification_id: Uuid) -> AppResult<()> {
        self.store.mark_read(notification_id, Utc::now()).await
    }

    /// Mark every unread notification of a user as read.
    ///
    /// Per-record writes run concurrently and are not transactional: a
    /// partial failure leaves a mixed read/unread state, reported via the
    /// returned error while landed writes stand.
    pub async fn mark_all_as_read(&self, user_id: Uuid) -> AppResult<()> {
        let unread = self
            .store
            .find_by_recipient(user_id, usize::MAX, true)
            .await?;
        if unread.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let results = join_all(unread.iter().map(|n| self.store.mark_read(n.id, now))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(user = %user_id, failed, total = results.len(), "mark-all-read partially failed");
            return Err(AppError::storage(format!(
                "{failed} of {} mark-read writes failed",
                results.len()
            )));
        }
        Ok(())
    }

    /// Hard-delete a notification.
    pub async fn delete_notification(&self, notification_id: Uuid) -> AppResult<()> {
        self.store.delete(notification_id).await
    }

    /// Count a user's unread notifications (UI badge count).
    pub async fn get_unread_count(&self, user_id: Uuid) -> AppResult<u64> {
        self.store.count_unread(user_id).await
    }

    /// Open a live feed of the user's top-N newest notifications.
    ///
    /// Every insert, read-state change, or delete touching the window
    /// pushes a full snapshot. `limit` defaults to the configured
    /// subscribe limit. Drop or cancel the feed to detach.
    pub async fn subscribe_to_notifications(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> AppResult<NotificationFeed> {
        let limit = limit.unwrap_or(self.config.subscribe_limit);
        self.store.subscribe(user_id, limit).await
    }
}
