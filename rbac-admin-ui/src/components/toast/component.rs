use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastOptions, Toasts};
use rbac::{Notification, NotificationVariant};

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider { {children} }
    }
}

/// Shows a console notification through the toast stack.
pub fn notify(toaster: &Toasts, notification: Notification) {
    let mut options = ToastOptions::new().permanent(notification.dismiss_delay.is_none());
    if let Some(delay) = notification.dismiss_delay {
        options = options.duration(delay);
    }

    let message = match &notification.description {
        Some(description) => format!("{}: {}", notification.title, description),
        None => notification.title.clone(),
    };

    match notification.variant {
        NotificationVariant::Success => toaster.success(message, options),
        NotificationVariant::Info => toaster.info(message, options),
        NotificationVariant::Warning => toaster.warning(message, options),
        NotificationVariant::Danger => toaster.error(message, options),
    }
}
