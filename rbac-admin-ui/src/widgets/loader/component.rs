use dioxus::prelude::*;

/// Skeleton shown in place of the table body; one bar per expected row.
#[component]
pub fn ListLoader(rows: u32, #[props(default)] compact: bool) -> Element {
    let class = if compact { "list-loader compact" } else { "list-loader" };
    rsx! {
        div { class: "{class}", aria_busy: "true", aria_label: "Loading",
            for i in 0..rows {
                div { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}
