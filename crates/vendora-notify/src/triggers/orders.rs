//! Order lifecycle and payout triggers.

use tracing::warn;
use uuid::Uuid;

use vendora_entity::{NotificationKind, NotificationMetadata, OrderStatus};

use crate::service::CreateOverrides;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// An order was placed.
    ///
    /// Two notifications: the customer's confirmation and the vendor's
    /// incoming-order alert. Each is created independently; one failing
    /// does not stop the other.
    pub async fn order_placed(
        &self,
        order_id: &str,
        customer_id: Uuid,
        vendor_id: Uuid,
        amount: f64,
    ) {
        let metadata = NotificationMetadata {
            order_id: Some(order_id.to_string()),
            vendor_id: Some(vendor_id),
            amount: Some(amount),
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(
                customer_id,
                NotificationKind::OrderPlaced,
                CreateOverrides {
                    metadata: metadata.clone(),
                    ..Default::default()
                },
            )
            .await
        {
            warn!(order_id, error = %e, "Failed to notify customer of placed order");
        }

        if let Err(e) = self
            .service()
            .create_notification(
                vendor_id,
                NotificationKind::NewOrderReceived,
                CreateOverrides {
                    metadata,
                    ..Default::default()
                },
            )
            .await
        {
            warn!(order_id, error = %e, "Failed to notify vendor of new order");
        }
    }

    /// An order moved to a new status.
    ///
    /// Only confirmed, shipped, delivered, and cancelled notify the
    /// customer; every other status is a silent no-op.
    pub async fn order_status_changed(
        &self,
        order_id: &str,
        customer_id: Uuid,
        status: OrderStatus,
    ) {
        let kind = match status {
            OrderStatus::Confirmed => NotificationKind::OrderConfirmed,
            OrderStatus::Shipped => NotificationKind::OrderShipped,
            OrderStatus::Delivered => NotificationKind::OrderDelivered,
            OrderStatus::Cancelled => NotificationKind::OrderCancelled,
            _ => return,
        };

        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                order_id: Some(order_id.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(customer_id, kind, overrides)
            .await
        {
            warn!(order_id, %status, error = %e, "Failed to notify customer of status change");
        }
    }

    /// A vendor payout was processed.
    pub async fn payout_processed(&self, vendor_id: Uuid, amount: f64) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                amount: Some(amount),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(vendor_id, NotificationKind::PayoutProcessed, overrides)
            .await
        {
            warn!(vendor = %vendor_id, error = %e, "Failed to notify vendor of payout");
        }
    }
}
