//! Live notification feed types.
//!
//! A feed delivers full top-N snapshots of a recipient's newest
//! notifications — not diffs — on every relevant change, over an
//! unbounded channel. The [`Unsubscribe`] guard detaches the underlying
//! watcher; after detachment the channel closes and no further snapshots
//! arrive.

use tokio::sync::mpsc;

use vendora_entity::Notification;

/// Cancellation guard for a subscription.
///
/// Runs its detach action exactly once, either via [`cancel`](Self::cancel)
/// or on drop.
pub struct Unsubscribe {
    on_cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Unsubscribe {
    /// Create a guard around a detach action.
    pub fn new(on_cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_cancel: Some(Box::new(on_cancel)),
        }
    }

    /// Detach the watcher now.
    pub fn cancel(mut self) {
        if let Some(f) = self.on_cancel.take() {
            f();
        }
    }
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        if let Some(f) = self.on_cancel.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("armed", &self.on_cancel.is_some())
            .finish()
    }
}

/// A live feed of snapshot updates for one recipient.
#[derive(Debug)]
pub struct NotificationFeed {
    receiver: mpsc::UnboundedReceiver<Vec<Notification>>,
    canceller: Unsubscribe,
}

impl NotificationFeed {
    /// Assemble a feed from its channel receiver and detach guard.
    pub fn new(
        receiver: mpsc::UnboundedReceiver<Vec<Notification>>,
        canceller: Unsubscribe,
    ) -> Self {
        Self {
            receiver,
            canceller,
        }
    }

    /// Wait for the next snapshot. Returns `None` once the feed is
    /// detached and all buffered snapshots have been drained.
    pub async fn recv(&mut self) -> Option<Vec<Notification>> {
        self.receiver.recv().await
    }

    /// Take an already-buffered snapshot without waiting.
    pub fn try_recv(&mut self) -> Option<Vec<Notification>> {
        self.receiver.try_recv().ok()
    }

    /// Stop the feed: detaches the watcher and releases its resources.
    pub fn unsubscribe(self) {
        self.canceller.cancel();
    }
}
