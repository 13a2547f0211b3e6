//! Notification domain entities.

pub mod kind;
pub mod metadata;
pub mod model;
pub mod priority;
pub mod status;

pub use kind::NotificationKind;
pub use metadata::NotificationMetadata;
pub use model::{NewNotification, Notification};
pub use priority::NotificationPriority;
pub use status::NotificationStatus;
