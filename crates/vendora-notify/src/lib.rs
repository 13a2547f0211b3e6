//! # vendora-notify
//!
//! The notification core of the Vendora marketplace: a static template
//! registry, the [`NotificationService`] (creation, templating, targeted
//! and role-broadcast fan-out, read-state tracking, live subscription),
//! and [`NotificationTriggers`] mapping business events to notifications.
//!
//! The service is constructed once per process and shared behind an
//! `Arc`; it holds no mutable state of its own, delegating all
//! concurrency concerns to the store's per-record atomicity.

pub mod service;
pub mod template;
pub mod triggers;

pub use service::{CreateOverrides, NotificationService};
pub use template::{NotificationTemplate, template_for};
pub use triggers::NotificationTriggers;
