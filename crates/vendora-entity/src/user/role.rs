//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a marketplace account can hold.
///
/// Role broadcasts resolve recipients by matching against the stored role
/// of each user at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// A shopper.
    Customer,
    /// A storefront owner.
    Vendor,
    /// Platform administrator.
    Admin,
    /// Administrator with full platform control.
    SuperAdmin,
    /// Content and review moderator.
    Moderator,
    /// Customer support staff.
    Support,
}

impl UserRole {
    /// All roles, for platform-wide broadcasts.
    pub const ALL: [UserRole; 6] = [
        Self::Customer,
        Self::Vendor,
        Self::Admin,
        Self::SuperAdmin,
        Self::Moderator,
        Self::Support,
    ];

    /// Roles that receive admin-facing notifications.
    pub const ADMINS: [UserRole; 2] = [Self::Admin, Self::SuperAdmin];

    /// Roles that receive moderation-queue notifications.
    pub const MODERATION: [UserRole; 3] = [Self::Moderator, Self::Admin, Self::SuperAdmin];

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
            Self::Moderator => "moderator",
            Self::Support => "support",
        }
    }

    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = vendora_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "vendor" => Ok(Self::Vendor),
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            "moderator" => Ok(Self::Moderator),
            "support" => Ok(Self::Support),
            _ => Err(vendora_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: customer, vendor, admin, super_admin, moderator, support"
            ))),
        }
    }
}
