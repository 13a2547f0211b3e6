//! Moderation queue triggers.

use tracing::warn;
use uuid::Uuid;

use vendora_entity::{NotificationKind, NotificationMetadata, NotificationPriority, UserRole};

use crate::service::CreateOverrides;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// A customer submitted a product review.
    pub async fn review_submitted(&self, product_id: Uuid, product_name: &str, rating: f64) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                rating: Some(rating),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_role_notification(
                &UserRole::MODERATION,
                NotificationKind::ReviewPendingModeration,
                overrides,
            )
            .await
        {
            warn!(product = %product_id, error = %e, "Failed to notify moderators of review");
        }
    }

    /// An abuse report was filed against a product.
    ///
    /// Priority is forced to high regardless of the template default.
    pub async fn abuse_report_filed(
        &self,
        report_id: Uuid,
        product_id: Uuid,
        product_name: &str,
        reason: &str,
    ) {
        let overrides = CreateOverrides {
            priority: Some(NotificationPriority::High),
            metadata: NotificationMetadata {
                report_id: Some(report_id),
                report_reason: Some(reason.to_string()),
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_role_notification(
                &UserRole::ADMINS,
                NotificationKind::AbuseReportFiled,
                overrides,
            )
            .await
        {
            warn!(report = %report_id, error = %e, "Failed to notify admins of abuse report");
        }
    }
}
