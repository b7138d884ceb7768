use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    /// Badge next to the label, e.g. how many applications a bundle groups
    #[props(default)]
    pub badge: Option<usize>,
}

impl TabItem {
    fn accessible_label(&self) -> String {
        match self.badge {
            Some(n) => format!("{} ({n})", self.label),
            None => self.label.clone(),
        }
    }
}

#[component]
pub fn Tabs(items: Vec<TabItem>, active_tab: String, on_tab_change: EventHandler<String>) -> Element {
    rsx! {
        nav { class: "tabs", role: "tablist",
            for item in items {
                {
                    let selected = item.id == active_tab;
                    let aria_label = item.accessible_label();
                    let id = item.id.clone();
                    rsx! {
                        button {
                            key: "{item.id}",
                            class: if selected { "tab active" } else { "tab" },
                            role: "tab",
                            aria_selected: "{selected}",
                            aria_label,
                            onclick: move |_| on_tab_change.call(id.clone()),
                            "{item.label}"
                            if let Some(badge) = item.badge {
                                span { class: "tab-badge", "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessible_label_includes_badge() {
        let tab = TabItem {
            id: "insights".to_string(),
            label: "Red Hat Insights".to_string(),
            badge: Some(3),
        };
        assert_eq!(tab.accessible_label(), "Red Hat Insights (3)");

        let plain = TabItem { badge: None, ..tab };
        assert_eq!(plain.accessible_label(), "Red Hat Insights");
    }
}
