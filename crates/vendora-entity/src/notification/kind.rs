//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of notification kinds the marketplace emits.
///
/// Each kind maps to exactly one template in the registry; the mapping is
/// an exhaustive `match`, so adding a variant here without a template is
/// a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    // Account events
    /// A new user finished registration.
    Welcome,
    /// Admin-facing: a non-vendor account was created.
    NewUserRegistered,
    /// Admin-facing: someone applied for a vendor storefront.
    NewVendorApplication,
    /// The affected user's account saw unusual activity.
    SecurityAlert,

    // Vendor / catalog lifecycle
    /// Moderator-facing: a product was submitted for review.
    ProductPendingApproval,
    /// Vendor-facing: a product passed review and is live.
    ProductApproved,
    /// Vendor-facing: a product failed review.
    ProductRejected,
    /// Vendor-facing: a payout was sent.
    PayoutProcessed,

    // Order lifecycle
    /// Customer-facing: the order was placed.
    OrderPlaced,
    /// Vendor-facing: a new order came in.
    NewOrderReceived,
    /// Customer-facing: the vendor confirmed the order.
    OrderConfirmed,
    /// Customer-facing: the order shipped.
    OrderShipped,
    /// Customer-facing: the order was delivered.
    OrderDelivered,
    /// Customer-facing: the order was cancelled.
    OrderCancelled,

    // Moderation
    /// Moderator-facing: a review needs moderation.
    ReviewPendingModeration,
    /// Admin-facing: an abuse report was filed.
    AbuseReportFiled,

    // Storefront follow
    /// Store-owner-facing: a user followed the storefront.
    NewFollower,
    /// Wishlisting-user-facing: a wishlisted product is back in stock.
    ProductBackInStock,
    /// Cart-owner-facing: a cart item's price dropped.
    CartItemPriceDrop,

    // Communication / system
    /// Receiver-facing: a direct message arrived.
    NewMessage,
    /// Everyone: scheduled platform maintenance.
    SystemMaintenance,
}

impl NotificationKind {
    /// All kinds, for registry completeness checks.
    pub const ALL: [NotificationKind; 21] = [
        Self::Welcome,
        Self::NewUserRegistered,
        Self::NewVendorApplication,
        Self::SecurityAlert,
        Self::ProductPendingApproval,
        Self::ProductApproved,
        Self::ProductRejected,
        Self::PayoutProcessed,
        Self::OrderPlaced,
        Self::NewOrderReceived,
        Self::OrderConfirmed,
        Self::OrderShipped,
        Self::OrderDelivered,
        Self::OrderCancelled,
        Self::ReviewPendingModeration,
        Self::AbuseReportFiled,
        Self::NewFollower,
        Self::ProductBackInStock,
        Self::CartItemPriceDrop,
        Self::NewMessage,
        Self::SystemMaintenance,
    ];

    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::NewUserRegistered => "new_user_registered",
            Self::NewVendorApplication => "new_vendor_application",
            Self::SecurityAlert => "security_alert",
            Self::ProductPendingApproval => "product_pending_approval",
            Self::ProductApproved => "product_approved",
            Self::ProductRejected => "product_rejected",
            Self::PayoutProcessed => "payout_processed",
            Self::OrderPlaced => "order_placed",
            Self::NewOrderReceived => "new_order_received",
            Self::OrderConfirmed => "order_confirmed",
            Self::OrderShipped => "order_shipped",
            Self::OrderDelivered => "order_delivered",
            Self::OrderCancelled => "order_cancelled",
            Self::ReviewPendingModeration => "review_pending_moderation",
            Self::AbuseReportFiled => "abuse_report_filed",
            Self::NewFollower => "new_follower",
            Self::ProductBackInStock => "product_back_in_stock",
            Self::CartItemPriceDrop => "cart_item_price_drop",
            Self::NewMessage => "new_message",
            Self::SystemMaintenance => "system_maintenance",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = vendora_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| {
                vendora_core::AppError::validation(format!("Invalid notification kind: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        // ALL must stay in sync with the enum; round-trip via FromStr.
        for kind in NotificationKind::ALL {
            assert_eq!(kind.as_str().parse::<NotificationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&NotificationKind::OrderPlaced).unwrap();
        assert_eq!(json, "\"order_placed\"");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("order_refunded_twice".parse::<NotificationKind>().is_err());
    }
}
