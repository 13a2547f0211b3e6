//! Static template registry.
//!
//! One entry per [`NotificationKind`]. The mapping is a single exhaustive
//! `match`, so a kind without a template cannot compile.

use vendora_entity::{NotificationKind, NotificationPriority};

/// A notification template with placeholder tokens intact.
///
/// Read-only configuration; title and message may contain `{token}`
/// placeholders resolved at creation time from the metadata bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTemplate {
    /// Title text, possibly with placeholder tokens.
    pub title: &'static str,
    /// Body text, possibly with placeholder tokens.
    pub message: &'static str,
    /// Default priority; triggers may override per event.
    pub priority: NotificationPriority,
    /// Display icon for consuming UIs.
    pub icon: &'static str,
}

/// Look up the template for a notification kind.
pub fn template_for(kind: NotificationKind) -> NotificationTemplate {
    use NotificationPriority::{High, Low, Medium};

    match kind {
        NotificationKind::Welcome => NotificationTemplate {
            title: "Welcome to Vendora!",
            message: "Hi {userName}, your account is ready. Start exploring great deals from local vendors.",
            priority: Medium,
            icon: "👋",
        },
        NotificationKind::NewUserRegistered => NotificationTemplate {
            title: "New User Registered",
            message: "{userName} just created an account.",
            priority: Low,
            icon: "🧑",
        },
        NotificationKind::NewVendorApplication => NotificationTemplate {
            title: "New Vendor Application",
            message: "{userName} applied to open a vendor storefront.",
            priority: High,
            icon: "🏪",
        },
        NotificationKind::SecurityAlert => NotificationTemplate {
            title: "Security Alert",
            message: "We noticed unusual activity on your account. Please review your recent sign-ins.",
            priority: High,
            icon: "⚠️",
        },
        NotificationKind::ProductPendingApproval => NotificationTemplate {
            title: "Product Awaiting Approval",
            message: "{vendorName} submitted '{productName}' for review.",
            priority: Medium,
            icon: "🔎",
        },
        NotificationKind::ProductApproved => NotificationTemplate {
            title: "Product Approved",
            message: "Your product '{productName}' passed review and is now live.",
            priority: Medium,
            icon: "✅",
        },
        NotificationKind::ProductRejected => NotificationTemplate {
            title: "Product Rejected",
            message: "Your product '{productName}' did not pass review.",
            priority: Medium,
            icon: "🚫",
        },
        NotificationKind::PayoutProcessed => NotificationTemplate {
            title: "Payout Processed",
            message: "Your payout of {amount} has been sent to your account.",
            priority: High,
            icon: "💸",
        },
        NotificationKind::OrderPlaced => NotificationTemplate {
            title: "Order Placed",
            message: "Your order {orderId} has been placed. Total: {amount}.",
            priority: Medium,
            icon: "🛒",
        },
        NotificationKind::NewOrderReceived => NotificationTemplate {
            title: "New Order Received",
            message: "You received order {orderId} worth {amount}.",
            priority: High,
            icon: "📦",
        },
        NotificationKind::OrderConfirmed => NotificationTemplate {
            title: "Order Confirmed",
            message: "Order {orderId} has been confirmed by the vendor.",
            priority: Medium,
            icon: "👍",
        },
        NotificationKind::OrderShipped => NotificationTemplate {
            title: "Order Shipped",
            message: "Order {orderId} is on its way.",
            priority: Medium,
            icon: "🚚",
        },
        NotificationKind::OrderDelivered => NotificationTemplate {
            title: "Order Delivered",
            message: "Order {orderId} has been delivered. Enjoy!",
            priority: Medium,
            icon: "🎁",
        },
        NotificationKind::OrderCancelled => NotificationTemplate {
            title: "Order Cancelled",
            message: "Order {orderId} has been cancelled.",
            priority: High,
            icon: "❌",
        },
        NotificationKind::ReviewPendingModeration => NotificationTemplate {
            title: "Review Awaiting Moderation",
            message: "A new review of '{productName}' needs moderation.",
            priority: Medium,
            icon: "📝",
        },
        NotificationKind::AbuseReportFiled => NotificationTemplate {
            title: "Abuse Report Filed",
            message: "A report was filed against '{productName}'.",
            priority: Medium,
            icon: "🚩",
        },
        NotificationKind::NewFollower => NotificationTemplate {
            title: "New Follower",
            message: "{userName} now follows {storeName}.",
            priority: Low,
            icon: "⭐",
        },
        NotificationKind::ProductBackInStock => NotificationTemplate {
            title: "Back in Stock",
            message: "'{productName}' from {storeName} is back in stock. Grab it before it sells out again.",
            priority: Medium,
            icon: "📢",
        },
        NotificationKind::CartItemPriceDrop => NotificationTemplate {
            title: "Price Drop",
            message: "'{productName}' in your cart just dropped in price.",
            priority: Medium,
            icon: "📉",
        },
        NotificationKind::NewMessage => NotificationTemplate {
            title: "New Message",
            message: "{userName} sent you a message.",
            priority: Medium,
            icon: "💬",
        },
        NotificationKind::SystemMaintenance => NotificationTemplate {
            title: "Scheduled Maintenance",
            message: "The marketplace will be briefly unavailable for scheduled maintenance.",
            priority: Medium,
            icon: "🛠",
        },
    }
}
