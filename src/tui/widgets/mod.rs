//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod notification;

// Re-export commonly used widgets
pub use input::TextInput;
pub use notification::{Notification, NotificationType, NotificationWidget};
