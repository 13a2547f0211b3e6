//! Platform-wide system triggers.

use tracing::warn;

use vendora_entity::{NotificationKind, NotificationPriority, UserRole};

use crate::service::CreateOverrides;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// Maintenance was scheduled for the whole platform.
    ///
    /// Broadcast to every role, priority forced to high, message
    /// interpolated with the maintenance window.
    pub async fn maintenance_scheduled(&self, date: &str, duration: &str) {
        let overrides = CreateOverrides {
            priority: Some(NotificationPriority::High),
            message: Some(format!(
                "The marketplace will be unavailable on {date} for approximately {duration}. \
                 We apologize for the inconvenience."
            )),
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_role_notification(&UserRole::ALL, NotificationKind::SystemMaintenance, overrides)
            .await
        {
            warn!(date, error = %e, "Failed to broadcast maintenance notice");
        }
    }
}
