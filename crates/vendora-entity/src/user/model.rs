//! User directory record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;

/// A user record as seen by the notification core.
///
/// The identity provider owns the full account; the core only reads the
/// fields needed for role-broadcast recipient resolution and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub display_name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Marketplace role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
