//! In-memory document-store backend.
//!
//! Used by the test suite and by embedders that run without a hosted
//! document database. Records live in concurrent maps; watchers receive
//! full snapshots synchronously with each mutation, which keeps tests
//! deterministic.

pub mod notifications;
pub mod users;

pub use notifications::MemoryNotificationStore;
pub use users::MemoryUserDirectory;
