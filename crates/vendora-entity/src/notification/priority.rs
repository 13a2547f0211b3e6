//! Notification priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display priority of a notification.
///
/// Drives default sort and highlight in consuming UIs. Inherited from the
/// template unless a trigger overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    /// Informational, no highlight.
    Low,
    /// Default level.
    Medium,
    /// Highlighted in lists.
    High,
    /// Requires immediate attention.
    Urgent,
}

impl NotificationPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
