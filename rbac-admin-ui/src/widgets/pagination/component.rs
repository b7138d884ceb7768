use dioxus::prelude::*;
use rbac::table::{PaginationControls, TableAction};

/// Page navigator with a per-page select. `variant` is "top" or "bottom".
#[component]
pub fn PaginationBar(
    controls: PaginationControls,
    #[props(default = "top".to_string(), into)] variant: String,
    on_action: EventHandler<TableAction>,
) -> Element {
    let page = controls.page;
    let summary = controls.summary();
    let disabled = controls.is_disabled;
    let has_previous = controls.has_previous() && !disabled;
    let has_next = controls.has_next() && !disabled;
    let page_count = controls.page_count();

    rsx! {
        nav { class: "pagination {variant}", aria_label: "Pagination",
            span { class: "pagination-summary", "{summary}" }
            select {
                class: "pagination-per-page",
                aria_label: "Items per page",
                disabled,
                onchange: move |e: Event<FormData>| {
                    if let Ok(per_page) = e.value().parse::<u32>() {
                        on_action.call(TableAction::PerPage(per_page));
                    }
                },
                for size in controls.per_page_options.clone() {
                    option {
                        value: "{size}",
                        selected: size == controls.per_page,
                        "{size} per page"
                    }
                }
            }
            button {
                class: "pagination-nav",
                aria_label: "Go to previous page",
                disabled: !has_previous,
                onclick: move |_| on_action.call(TableAction::SetPage(page.saturating_sub(1))),
                "‹"
            }
            span { class: "pagination-page", "{page} of {page_count}" }
            button {
                class: "pagination-nav",
                aria_label: "Go to next page",
                disabled: !has_next,
                onclick: move |_| on_action.call(TableAction::SetPage(page + 1)),
                "›"
            }
        }
    }
}
