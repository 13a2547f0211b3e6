//! Storefront-follow, wishlist, and cart triggers.

use tracing::warn;
use uuid::Uuid;

use vendora_entity::{NotificationKind, NotificationMetadata};

use crate::service::CreateOverrides;
use crate::template::format_amount;

use super::NotificationTriggers;

impl NotificationTriggers {
    /// A user followed a storefront.
    pub async fn store_followed(&self, owner_id: Uuid, follower_name: &str, store_name: &str) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                user_name: Some(follower_name.to_string()),
                store_name: Some(store_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(owner_id, NotificationKind::NewFollower, overrides)
            .await
        {
            warn!(owner = %owner_id, error = %e, "Failed to notify store owner of follower");
        }
    }

    /// A wishlisted product came back in stock.
    pub async fn wishlist_back_in_stock(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        product_name: &str,
        store_name: &str,
    ) {
        let overrides = CreateOverrides {
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                store_name: Some(store_name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(user_id, NotificationKind::ProductBackInStock, overrides)
            .await
        {
            warn!(user = %user_id, product = %product_id, error = %e, "Failed to create back-in-stock notification");
        }
    }

    /// The price of an item sitting in a user's cart dropped.
    ///
    /// The message is overridden with the computed savings.
    pub async fn cart_price_dropped(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        product_name: &str,
        old_price: f64,
        new_price: f64,
    ) {
        let savings = old_price - new_price;
        let overrides = CreateOverrides {
            message: Some(format!(
                "'{product_name}' in your cart dropped from {} to {}. You save {}!",
                format_amount(old_price),
                format_amount(new_price),
                format_amount(savings),
            )),
            metadata: NotificationMetadata {
                product_id: Some(product_id),
                product_name: Some(product_name.to_string()),
                amount: Some(new_price),
                ..Default::default()
            },
            ..Default::default()
        };

        if let Err(e) = self
            .service()
            .create_notification(user_id, NotificationKind::CartItemPriceDrop, overrides)
            .await
        {
            warn!(user = %user_id, product = %product_id, error = %e, "Failed to create price-drop notification");
        }
    }
}
