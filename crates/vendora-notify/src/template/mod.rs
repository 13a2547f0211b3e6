//! Notification templates: the static registry and placeholder rendering.

pub mod registry;
pub mod render;

pub use registry::{NotificationTemplate, template_for};
pub use render::{format_amount, render};
