//! Business-event triggers.
//!
//! One method per business event, mapping the event's parameters to one
//! or more notification creations with event-specific recipients and
//! metadata. Every method catches and logs service errors instead of
//! propagating them: the triggering business operation (placing an
//! order, filing a report) must complete regardless of notification
//! subsystem health.
//!
//! Trigger methods are grouped by domain across this module's files; all
//! of them hang off [`NotificationTriggers`].

mod account;
mod catalog;
mod engagement;
mod moderation;
mod orders;
mod system;

use std::sync::Arc;

use crate::service::NotificationService;

/// Maps domain events to notification creations.
#[derive(Clone)]
pub struct NotificationTriggers {
    /// The process-wide notification service.
    service: Arc<NotificationService>,
}

impl NotificationTriggers {
    /// Create the trigger set over a shared service handle.
    pub fn new(service: Arc<NotificationService>) -> Self {
        Self { service }
    }

    /// Access the underlying service.
    pub fn service(&self) -> &Arc<NotificationService> {
        &self.service
    }
}
