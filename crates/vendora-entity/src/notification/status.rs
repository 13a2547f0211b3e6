//! Notification read-state enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read state of a notification.
///
/// Every notification starts `Unread` and transitions to `Read` via an
/// explicit mark-as-read call. `Archived` is reserved for future use; no
/// current code path produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Not yet seen by the recipient.
    Unread,
    /// Marked read by the recipient.
    Read,
    /// Archived (reserved).
    Archived,
}

impl NotificationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
