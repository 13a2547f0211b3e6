//! Notification core configuration.

use serde::{Deserialize, Serialize};

/// Notification service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Default number of notifications returned by list queries.
    #[serde(default = "default_query_limit")]
    pub default_query_limit: usize,
    /// Default top-N window size for live subscription feeds.
    #[serde(default = "default_subscribe_limit")]
    pub subscribe_limit: usize,
    /// Cap on stored notifications per user; backends evict the oldest
    /// records beyond it on insert.
    #[serde(default = "default_max_stored")]
    pub max_stored_per_user: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_query_limit: default_query_limit(),
            subscribe_limit: default_subscribe_limit(),
            max_stored_per_user: default_max_stored(),
        }
    }
}

fn default_query_limit() -> usize {
    50
}

fn default_subscribe_limit() -> usize {
    20
}

fn default_max_stored() -> u64 {
    1000
}
