//! Product catalog triggers.

use tracing::warn;
use uuid::Uuid;

use vendora_entity::{NotificationKind, NotificationMetadata, UserRole};

use crate::service::CreateOverrides;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// A vendor created a product; it enters the moderation queue.
    pub async fn product_created(
        &self,
        product_id: Uuid,
        product_name: &str,
        vendor_name: &str,
    ) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                vendor_name: Some(vendor_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_role_notification(
                &UserRole::MODERATION,
                NotificationKind::ProductPendingApproval,
                overrides,
            )
            .await
        {
            warn!(product = %product_id, error = %e, "Failed to notify moderators of new product");
        }
    }

    /// A product passed moderation review.
    pub async fn product_approved(&self, vendor_id: Uuid, product_id: Uuid, product_name: &str) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(vendor_id, NotificationKind::ProductApproved, overrides)
            .await
        {
            warn!(product = %product_id, error = %e, "Failed to notify vendor of approval");
        }
    }

    /// A product failed moderation review.
    pub async fn product_rejected(
        &self,
        vendor_id: Uuid,
        product_id: Uuid,
        product_name: &str,
        reason: &str,
    ) {
        let overrides = CreateOverrides {
            message: Some(format!(
                "Your product '{product_name}' did not pass review: {reason}."
            )),
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(vendor_id, NotificationKind::ProductRejected, overrides)
            .await
        {
            warn!(product = %product_id, error = %e, "Failed to notify vendor of rejection");
        }
    }
}
