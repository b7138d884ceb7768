use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Icon, title and description lines with an optional single action.
/// `compact` is used when the state sits inside a table body.
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    description: Vec<String>,
    action_label: Option<String>,
    #[props(default)] action_variant: ButtonVariant,
    #[props(default)] compact: bool,
    on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    let class = if compact { "empty-state compact" } else { "empty-state" };
    let action = action_label.zip(on_action);

    rsx! {
        section { class, aria_live: "polite",
            span { class: "empty-icon", aria_hidden: "true", "{icon}" }
            if compact {
                h4 { class: "empty-title", "{title}" }
            } else {
                h3 { class: "empty-title", "{title}" }
            }
            div { class: "empty-body",
                for (i, line) in description.into_iter().enumerate() {
                    p { key: "{i}", "{line}" }
                }
            }
            if let Some((label, handler)) = action {
                div { class: "empty-actions",
                    Button {
                        variant: action_variant,
                        onclick: move |e| handler.call(e),
                        "{label}"
                    }
                }
            }
        }
    }
}
