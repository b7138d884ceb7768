use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::widgets::pagination::PaginationBar;
use dioxus::prelude::*;
use rbac::table::{FilterInput, FilterKind, FilterValue, Selection, TableAction, TableView};

#[component]
pub fn Toolbar(view: TableView, on_action: EventHandler<TableAction>) -> Element {
    let toolbar = view.toolbar();
    let placeholder = toolbar.placeholder();
    let disabled = toolbar.is_disabled;
    let selection_label = toolbar.selection_label();
    let chips = toolbar.chips();
    let pagination = toolbar.top_pagination();
    let buttons = toolbar.buttons.to_vec();
    let filters = toolbar.filters.to_vec();
    let text_value = match toolbar.filter_value {
        FilterValue::Text(text) => text.clone(),
        FilterValue::Fields(_) => String::new(),
    };

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-filters",
                if let Some(selected) = selection_label {
                    label { class: "toolbar-select",
                        input {
                            r#type: "checkbox",
                            disabled,
                            onchange: move |e: Event<FormData>| {
                                let selection = if e.checked() { Selection::Page } else { Selection::None };
                                on_action.call(TableAction::Select(selection));
                            },
                        }
                        "{selected}"
                    }
                }
                if filters.is_empty() {
                    Input {
                        r#type: "search",
                        aria_label: placeholder.clone(),
                        placeholder: placeholder.clone(),
                        value: text_value,
                        disabled,
                        oninput: move |e: FormEvent| on_action.call(TableAction::FilterText(e.value())),
                    }
                }
                for filter in filters {
                    match filter.kind.clone() {
                        FilterKind::Text => {
                            let key = filter.key.clone();
                            rsx! {
                                Input {
                                    r#type: "search",
                                    aria_label: filter.label().to_string(),
                                    placeholder: filter.placeholder.clone().unwrap_or_default(),
                                    value: filter.value.values().join(","),
                                    disabled,
                                    oninput: move |e: FormEvent| {
                                        on_action.call(TableAction::Filter {
                                            key: key.clone(),
                                            value: FilterInput::Text(e.value()),
                                        })
                                    },
                                }
                            }
                        }
                        FilterKind::Checkbox { items } => {
                            let selected = filter.value.values();
                            rsx! {
                                fieldset { class: "toolbar-checkbox-filter",
                                    legend { "{filter.label()}" }
                                    for item in items {
                                        {
                                            let key = filter.key.clone();
                                            let checked = selected.contains(&item.value);
                                            let current = selected.clone();
                                            let value = item.value.clone();
                                            rsx! {
                                                label {
                                                    input {
                                                        r#type: "checkbox",
                                                        checked,
                                                        disabled,
                                                        onchange: move |_| {
                                                            let mut next = current.clone();
                                                            if checked {
                                                                next.retain(|v| v != &value);
                                                            } else {
                                                                next.push(value.clone());
                                                            }
                                                            on_action.call(TableAction::Filter {
                                                                key: key.clone(),
                                                                value: FilterInput::Many(next),
                                                            });
                                                        },
                                                    }
                                                    "{item.label}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "toolbar-actions",
                for button in buttons {
                    {
                        let key = button.key.clone();
                        let variant = if button.primary { ButtonVariant::Primary } else { ButtonVariant::Secondary };
                        rsx! {
                            Button {
                                variant,
                                onclick: move |_| on_action.call(TableAction::Toolbar(key.clone())),
                                "{button.label}"
                            }
                        }
                    }
                }
            }
            PaginationBar { controls: pagination, variant: "top", on_action }
        }
        if !chips.is_empty() {
            div { class: "toolbar-chips",
                for group in chips {
                    div { class: "chip-group",
                        span { class: "chip-category", "{group.category}" }
                        for value in group.values.clone() {
                            {
                                let key = group.key.clone();
                                let removed = value.clone();
                                rsx! {
                                    span { class: "chip",
                                        "{value}"
                                        button {
                                            aria_label: "Remove {value}",
                                            onclick: move |_| on_action.call(TableAction::RemoveChip {
                                                key: key.clone(),
                                                value: removed.clone(),
                                            }),
                                            "×"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| on_action.call(TableAction::ClearChips),
                    "Clear filters"
                }
            }
        }
    }
}
