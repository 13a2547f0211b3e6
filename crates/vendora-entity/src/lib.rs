//! # vendora-entity
//!
//! Domain entity models for Vendora. Every struct in this crate
//! represents a document-store record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod notification;
pub mod order;
pub mod user;

pub use notification::{
    NewNotification, Notification, NotificationKind, NotificationMetadata, NotificationPriority,
    NotificationStatus,
};
pub use order::OrderStatus;
pub use user::{User, UserRole};
