//! In-memory notification collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use vendora_core::config::notifications::NotificationsConfig;
use vendora_core::AppResult;
use vendora_entity::{NewNotification, Notification, NotificationStatus};

use crate::feed::{NotificationFeed, Unsubscribe};
use crate::NotificationStore;

/// A stored record plus its insertion sequence.
///
/// `created_at` has limited resolution; the sequence breaks ties so that
/// newest-first ordering is stable for records created in the same instant
/// (e.g. by a concurrent bulk fan-out).
#[derive(Debug, Clone)]
struct StoredNotification {
    notification: Notification,
    seq: u64,
}

/// A standing live-feed watcher for one recipient.
#[derive(Debug)]
struct Watcher {
    recipient_id: Uuid,
    limit: usize,
    sender: mpsc::UnboundedSender<Vec<Notification>>,
}

/// In-memory implementation of [`NotificationStore`].
///
/// Inserting past the per-user cap evicts that recipient's oldest
/// records, so one noisy recipient cannot grow the store unboundedly.
#[derive(Debug)]
pub struct MemoryNotificationStore {
    /// Notification id → stored record.
    records: DashMap<Uuid, StoredNotification>,
    /// Watcher id → standing watcher. Shared with unsubscribe guards.
    watchers: Arc<DashMap<u64, Watcher>>,
    /// Insertion sequence counter.
    seq: AtomicU64,
    /// Watcher id counter.
    watcher_seq: AtomicU64,
    /// Maximum stored notifications per recipient.
    max_per_user: usize,
}

impl Default for MemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNotificationStore {
    /// Create an empty store with the default per-user cap.
    pub fn new() -> Self {
        Self::with_max_per_user(NotificationsConfig::default().max_stored_per_user)
    }

    /// Create an empty store capping each recipient at `max_per_user`
    /// stored notifications.
    pub fn with_max_per_user(max_per_user: u64) -> Self {
        Self {
            records: DashMap::new(),
            watchers: Arc::new(DashMap::new()),
            seq: AtomicU64::new(0),
            watcher_seq: AtomicU64::new(0),
            max_per_user: max_per_user as usize,
        }
    }

    /// Number of stored notifications, across all recipients.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store holds no notifications.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of attached live-feed watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Build the newest-first snapshot for a recipient.
    fn snapshot(&self, recipient_id: Uuid, limit: usize, unread_only: bool) -> Vec<Notification> {
        let mut matching: Vec<(u64, Notification)> = self
            .records
            .iter()
            .filter(|entry| {
                let n = &entry.notification;
                n.recipient_id == recipient_id
                    && (!unread_only || n.status == NotificationStatus::Unread)
            })
            .map(|entry| (entry.seq, entry.notification.clone()))
            .collect();

        matching.sort_by(|a, b| {
            b.1.created_at
                .cmp(&a.1.created_at)
                .then(b.0.cmp(&a.0))
        });
        matching.truncate(limit);
        matching.into_iter().map(|(_, n)| n).collect()
    }

    /// Push a fresh top-N snapshot to every watcher of this recipient.
    ///
    /// Watchers whose receiver has gone away are pruned here rather than
    /// at unsubscribe time only, so a dropped feed cannot leak.
    fn notify_watchers(&self, recipient_id: Uuid) {
        let mut stale = Vec::new();
        for watcher in self.watchers.iter() {
            if watcher.recipient_id != recipient_id {
                continue;
            }
            let snapshot = self.snapshot(recipient_id, watcher.limit, false);
            if watcher.sender.send(snapshot).is_err() {
                stale.push(*watcher.key());
            }
        }
        for key in stale {
            self.watchers.remove(&key);
            tracing::trace!(watcher = key, "Pruned stale notification watcher");
        }
    }

    /// Evict the recipient's oldest records beyond the per-user cap.
    fn trim_per_user(&self, recipient_id: Uuid) {
        let mut owned: Vec<(u64, Uuid)> = self
            .records
            .iter()
            .filter(|entry| entry.notification.recipient_id == recipient_id)
            .map(|entry| (entry.seq, entry.notification.id))
            .collect();
        if owned.len() <= self.max_per_user {
            return;
        }
        // Newest first by insertion sequence; everything past the cap goes.
        owned.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, id) in owned.drain(self.max_per_user..) {
            self.records.remove(&id);
            tracing::trace!(notification = %id, "Evicted notification beyond per-user cap");
        }
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: NewNotification) -> AppResult<Notification> {
        let record = Notification {
            id: Uuid::new_v4(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            priority: notification.priority,
            status: NotificationStatus::Unread,
            recipient_id: notification.recipient_id,
            recipient_role: notification.recipient_role,
            created_at: Utc::now(),
            read_at: None,
            expires_at: notification.expires_at,
            metadata: notification.metadata,
        };

        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.records.insert(
            record.id,
            StoredNotification {
                notification: record.clone(),
                seq,
            },
        );
        self.trim_per_user(record.recipient_id);
        self.notify_watchers(record.recipient_id);

        Ok(record)
    }

    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        limit: usize,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        Ok(self.snapshot(recipient_id, limit, unread_only))
    }

    async fn mark_read(&self, notification_id: Uuid, read_at: DateTime<Utc>) -> AppResult<()> {
        let recipient = match self.records.get_mut(&notification_id) {
            Some(mut entry) => {
                entry.notification.status = NotificationStatus::Read;
                entry.notification.read_at = Some(read_at);
                entry.notification.recipient_id
            }
            None => return Ok(()),
        };
        self.notify_watchers(recipient);
        Ok(())
    }

    async fn delete(&self, notification_id: Uuid) -> AppResult<()> {
        if let Some((_, removed)) = self.records.remove(&notification_id) {
            self.notify_watchers(removed.notification.recipient_id);
        }
        Ok(())
    }

    async fn count_unread(&self, recipient_id: Uuid) -> AppResult<u64> {
        let count = self
            .records
            .iter()
            .filter(|entry| {
                let n = &entry.notification;
                n.recipient_id == recipient_id && n.status == NotificationStatus::Unread
            })
            .count();
        Ok(count as u64)
    }

    async fn subscribe(&self, recipient_id: Uuid, limit: usize) -> AppResult<NotificationFeed> {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Initial snapshot, matching document-store change feeds that
        // fire once with current data on attach.
        let _ = sender.send(self.snapshot(recipient_id, limit, false));

        let watcher_id = self.watcher_seq.fetch_add(1, Ordering::SeqCst);
        self.watchers.insert(
            watcher_id,
            Watcher {
                recipient_id,
                limit,
                sender,
            },
        );

        let watchers = Arc::clone(&self.watchers);
        let canceller = Unsubscribe::new(move || {
            watchers.remove(&watcher_id);
        });

        Ok(NotificationFeed::new(receiver, canceller))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendora_entity::{NotificationKind, NotificationMetadata, NotificationPriority};

    fn new_notification(recipient_id: Uuid, title: &str) -> NewNotification {
        NewNotification {
            kind: NotificationKind::Welcome,
            title: title.to_string(),
            message: "hello".to_string(),
            priority: NotificationPriority::Medium,
            recipient_id,
            recipient_role: None,
            expires_at: None,
            metadata: NotificationMetadata::default(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_unread_status() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();

        let created = store.insert(new_notification(user, "a")).await.unwrap();

        assert_eq!(created.status, NotificationStatus::Unread);
        assert!(created.read_at.is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_recipient_newest_first_and_isolated() {
        let store = MemoryNotificationStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.insert(new_notification(alice, "first")).await.unwrap();
        store.insert(new_notification(alice, "second")).await.unwrap();
        store.insert(new_notification(bob, "other")).await.unwrap();

        let list = store.find_by_recipient(alice, 10, false).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "second");
        assert_eq!(list[1].title, "first");
        assert!(list.iter().all(|n| n.recipient_id == alice));
    }

    #[tokio::test]
    async fn test_limit_caps_results() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();
        for i in 0..5 {
            store
                .insert(new_notification(user, &format!("n{i}")))
                .await
                .unwrap();
        }

        let list = store.find_by_recipient(user, 3, false).await.unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].title, "n4");
    }

    #[tokio::test]
    async fn test_insert_evicts_oldest_beyond_per_user_cap() {
        let store = MemoryNotificationStore::with_max_per_user(2);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        for title in ["a1", "a2", "a3"] {
            store.insert(new_notification(alice, title)).await.unwrap();
        }
        store.insert(new_notification(bob, "b1")).await.unwrap();

        let kept = store.find_by_recipient(alice, 10, false).await.unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "a3");
        assert_eq!(kept[1].title, "a2");

        // Other recipients are untouched by the eviction.
        assert_eq!(store.find_by_recipient(bob, 10, false).await.unwrap().len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_mark_read_and_unread_filter() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();
        let created = store.insert(new_notification(user, "a")).await.unwrap();
        store.insert(new_notification(user, "b")).await.unwrap();

        store.mark_read(created.id, Utc::now()).await.unwrap();

        assert_eq!(store.count_unread(user).await.unwrap(), 1);
        let unread = store.find_by_recipient(user, 10, true).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].title, "b");
    }

    #[tokio::test]
    async fn test_mark_read_missing_id_is_noop() {
        let store = MemoryNotificationStore::new();
        store.mark_read(Uuid::new_v4(), Utc::now()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();
        let created = store.insert(new_notification(user, "a")).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert!(store.is_empty());
        // Deleting again is harmless.
        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_subscribe_delivers_snapshots_and_detaches() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();

        let mut feed = store.subscribe(user, 10).await.unwrap();
        assert_eq!(store.watcher_count(), 1);
        assert_eq!(feed.recv().await.unwrap().len(), 0);

        store.insert(new_notification(user, "live")).await.unwrap();
        let snapshot = feed.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "live");

        feed.unsubscribe();
        assert_eq!(store.watcher_count(), 0);
    }

    #[tokio::test]
    async fn test_dropped_feed_is_pruned() {
        let store = MemoryNotificationStore::new();
        let user = Uuid::new_v4();

        let feed = store.subscribe(user, 10).await.unwrap();
        drop(feed);

        assert_eq!(store.watcher_count(), 0);
    }

    #[tokio::test]
    async fn test_subscribe_ignores_other_recipients() {
        let store = MemoryNotificationStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut feed = store.subscribe(alice, 10).await.unwrap();
        let _ = feed.recv().await.unwrap();

        store.insert(new_notification(bob, "not yours")).await.unwrap();
        assert!(feed.try_recv().is_none());
    }
}
