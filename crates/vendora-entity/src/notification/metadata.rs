//! Open metadata bag attached to notifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional structured context attached to a notification.
///
/// Any subset of fields may be present; no kind requires specific fields.
/// Template rendering reads whichever fields it needs and substitutes an
/// empty string for absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationMetadata {
    /// Product involved in the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    /// Product display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Human-readable order code (e.g. "ORD-42").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Vendor involved in the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<Uuid>,
    /// Vendor display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Storefront involved in the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Uuid>,
    /// Storefront display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Display name of the user the event is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Monetary amount, in the platform currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Review rating, 1.0 to 5.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// User who sent a message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<Uuid>,
    /// Sender display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Abuse report identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<Uuid>,
    /// Abuse report reason text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_reason: Option<String>,
    /// UI call-to-action link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// UI call-to-action label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_not_serialized() {
        let meta = NotificationMetadata {
            order_id: Some("ORD-42".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"order_id": "ORD-42"}));
    }
}
