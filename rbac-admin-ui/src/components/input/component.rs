use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into)] id: Option<String>,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(into)] name: Option<String>,
    #[props(into)] placeholder: Option<String>,
    #[props(into)] value: Option<String>,
    #[props(into)] aria_label: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input",
            id,
            r#type: "{r#type}",
            name,
            placeholder,
            value,
            aria_label,
            required,
            disabled,
            oninput: move |e| {
                if let Some(handler) = &oninput {
                    handler.call(e);
                }
            },
        }
    }
}
