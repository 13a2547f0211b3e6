//! Account lifecycle triggers.

use tracing::warn;
use uuid::Uuid;

use vendora_entity::{NotificationKind, NotificationMetadata, NotificationPriority, UserRole};

use crate::service::CreateOverrides;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// A user finished registration.
    ///
    /// The new user gets a welcome notification; admins are told about
    /// the registration (as a vendor application when the account was
    /// registered as a vendor).
    pub async fn user_registered(&self, user_id: Uuid, user_name: &str, as_vendor: bool) {
        let metadata = NotificationMetadata {
            user_name: Some(user_name.to_string()),
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(
                user_id,
                NotificationKind::Welcome,
                CreateOverrides {
                    metadata: metadata.clone(),
                    ..Default::default()
                },
            )
            .await
        {
            warn!(user = %user_id, error = %e, "Failed to create welcome notification");
        }

        let admin_kind = if as_vendor {
            NotificationKind::NewVendorApplication
        } else {
            NotificationKind::NewUserRegistered
        };
        if let Err(e) = self
            .service()
            .create_role_notification(
                &UserRole::ADMINS,
                admin_kind,
                CreateOverrides {
                    metadata,
                    ..Default::default()
                },
            )
            .await
        {
            warn!(user = %user_id, error = %e, "Failed to notify admins of registration");
        }
    }

    /// Unusual activity was detected on a user's account.
    ///
    /// Priority is forced to urgent and the message carries the detected
    /// activity.
    pub async fn security_alert(&self, user_id: Uuid, activity: &str) {
        let overrides = CreateOverrides {
            priority: Some(NotificationPriority::Urgent),
            message: Some(format!(
                "We detected unusual activity on your account: {activity}. \
                 If this wasn't you, change your password immediately."
            )),
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(user_id, NotificationKind::SecurityAlert, overrides)
            .await
        {
            warn!(user = %user_id, error = %e, "Failed to create security alert");
        }
    }

    /// A user sent a direct message to another user.
    pub async fn message_received(&self, recipient_id: Uuid, sender_id: Uuid, sender_name: &str) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                sender_id: Some(sender_id),
                sender_name: Some(sender_name.to_string()),
                user_name: Some(sender_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(recipient_id, NotificationKind::NewMessage, overrides)
            .await
        {
            warn!(recipient = %recipient_id, error = %e, "Failed to create message notification");
        }
    }
}
