use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;

/// "Exit role creation?" confirmation shown when cancelling a dirty wizard.
#[component]
pub fn WarningModal(
    is_open: bool,
    on_stay: EventHandler<MouseEvent>,
    on_exit: EventHandler<MouseEvent>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h2 { class: "modal-title", "Exit role creation?" }
                p { "All inputs will be discarded." }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |e| on_exit.call(e),
                        "Exit"
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |e| on_stay.call(e),
                        "Stay"
                    }
                }
            }
        }
    }
}
