use crate::error::RbacError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Info,
    Warning,
    Danger,
}

/// Toast raised by a console flow; the UI decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: Option<String>,
    /// `None` keeps the toast until dismissed
    pub dismiss_delay: Option<Duration>,
    pub dismissable: bool,
}

impl Notification {
    pub fn new(variant: NotificationVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: None,
            dismiss_delay: None,
            dismissable: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_delay = Some(delay);
        self
    }

    pub fn not_dismissable(mut self) -> Self {
        self.dismissable = false;
        self
    }
}

impl From<RbacError> for Notification {
    fn from(err: RbacError) -> Self {
        Notification::new(NotificationVariant::Danger, err.to_string())
    }
}
