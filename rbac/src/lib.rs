// Public API
pub mod access;
pub mod bundles;
pub mod error;
pub mod notification;
pub mod query;
pub mod table;
pub mod wizard;

// Re-export commonly used types
pub use error::{RbacError, Result};
pub use notification::{Notification, NotificationVariant};
