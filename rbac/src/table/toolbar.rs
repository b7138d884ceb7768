use super::TableEvents;
use super::fetch::FetchDescriptor;
use super::filter::{self, Filter, FilterInput, FilterValue};
use super::pagination::{Pagination, PaginationControls};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-supplied toolbar action. By convention the first button is the
/// "create" action and is reused by the initial empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarButton {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub primary: bool,
}

impl ToolbarButton {
    pub fn primary(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            primary: true,
        }
    }

    pub fn secondary(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            primary: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Page,
    None,
}

/// Chips shown for one active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChipGroup {
    pub key: String,
    pub category: String,
    pub values: Vec<String>,
}

/// Control strip above the table.
///
/// Every filter edit is turned into a single `fetch_data` call that restarts
/// at offset 0 and keeps the current page size and sort.
#[derive(Debug, Clone)]
pub struct Toolbar<'a> {
    pub pagination: &'a Pagination,
    pub filter_value: &'a FilterValue,
    pub filters: &'a [Filter],
    pub order_by: Option<String>,
    pub buttons: &'a [ToolbarButton],
    pub title_singular: &'a str,
    pub filter_placeholder: Option<&'a str>,
    pub is_selectable: bool,
    pub selected_count: usize,
    pub is_disabled: bool,
    pub hide_filter_chips: bool,
}

impl<'a> Toolbar<'a> {
    pub fn placeholder(&self) -> String {
        match self.filter_placeholder {
            Some(placeholder) => placeholder.to_string(),
            None => format!("Filter by {}", self.title_singular.to_lowercase()),
        }
    }

    pub fn selection_label(&self) -> Option<String> {
        self.is_selectable
            .then(|| format!("{} selected", self.selected_count))
    }

    pub fn chips(&self) -> Vec<FilterChipGroup> {
        if self.hide_filter_chips {
            return Vec::new();
        }
        let mut groups = Vec::new();
        if let FilterValue::Text(text) = self.filter_value {
            if !text.is_empty() && self.filters.is_empty() {
                groups.push(FilterChipGroup {
                    key: filter::NAME_FILTER.to_string(),
                    category: "Name".to_string(),
                    values: vec![text.clone()],
                });
            }
        }
        groups.extend(
            self.filters
                .iter()
                .filter(|f| f.value.is_set())
                .map(|f| FilterChipGroup {
                    key: f.key.clone(),
                    category: f.label().to_string(),
                    values: f.value.values(),
                }),
        );
        groups
    }

    pub fn top_pagination(&self) -> PaginationControls {
        PaginationControls::build(self.pagination, self.filter_value, self.order_by.as_deref())
    }

    /// Free-text filter edited
    pub fn change_filter_value(&self, value: FilterValue, events: &mut dyn TableEvents) {
        debug!(?value, "filter value changed");
        let descriptor = self.restart().with_filter_value(&value);
        events.set_filter_value(value);
        events.fetch_data(descriptor);
    }

    /// Structured filter `key` edited
    pub fn change_filter(&self, key: &str, value: FilterInput, events: &mut dyn TableEvents) {
        let filters: Vec<Filter> = self
            .filters
            .iter()
            .map(|f| {
                if f.key == key {
                    f.clone().with_value(value.clone())
                } else {
                    f.clone()
                }
            })
            .collect();
        self.apply_filters(filters, events);
    }

    /// Chip removed; the text filter chip clears the filter value
    pub fn remove_chip(&self, key: &str, value: &str, events: &mut dyn TableEvents) {
        if self.filters.iter().any(|f| f.key == key) {
            let filters = self
                .filters
                .iter()
                .map(|f| {
                    if f.key == key {
                        f.clone().with_value(f.value.without(value))
                    } else {
                        f.clone()
                    }
                })
                .collect();
            self.apply_filters(filters, events);
        } else {
            self.change_filter_value(FilterValue::default(), events);
        }
    }

    pub fn clear_chips(&self, events: &mut dyn TableEvents) {
        let filters = filter::cleared(self.filters);
        let descriptor = self
            .restart()
            .with_filter_value(&FilterValue::default())
            .with_filters(&filters);
        events.set_filter_value(FilterValue::default());
        events.set_filters(filters);
        events.fetch_data(descriptor);
    }

    pub fn press(&self, key: &str, events: &mut dyn TableEvents) {
        if self.buttons.iter().any(|b| b.key == key) {
            events.on_toolbar_action(key);
        }
    }

    pub fn select(&self, selection: Selection, events: &mut dyn TableEvents) {
        if self.is_selectable && !self.is_disabled {
            events.on_select(selection);
        }
    }

    fn apply_filters(&self, filters: Vec<Filter>, events: &mut dyn TableEvents) {
        let descriptor = self
            .restart()
            .with_filter_value(self.filter_value)
            .with_filters(&filters);
        events.set_filters(filters);
        events.fetch_data(descriptor);
    }

    fn restart(&self) -> FetchDescriptor {
        FetchDescriptor::from_pagination(self.pagination)
            .with_offset(0)
            .with_order_by(self.order_by.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::filter::FilterItem;
    use crate::table::testing::RecordedEvents;

    fn status_filter() -> Filter {
        Filter::checkbox(
            "status",
            "Status",
            vec![
                FilterItem {
                    label: "Active".into(),
                    value: "Active".into(),
                },
                FilterItem {
                    label: "Inactive".into(),
                    value: "Inactive".into(),
                },
            ],
        )
    }

    fn toolbar<'a>(
        pagination: &'a Pagination,
        filter_value: &'a FilterValue,
        filters: &'a [Filter],
        buttons: &'a [ToolbarButton],
    ) -> Toolbar<'a> {
        Toolbar {
            pagination,
            filter_value,
            filters,
            order_by: Some("-modified".to_string()),
            buttons,
            title_singular: "Role",
            filter_placeholder: None,
            is_selectable: true,
            selected_count: 2,
            is_disabled: false,
            hide_filter_chips: false,
        }
    }

    #[test]
    fn test_text_filter_change_restarts_at_first_page() {
        let pagination = Pagination::new(10, 30, 80);
        let value = FilterValue::default();
        let toolbar = toolbar(&pagination, &value, &[], &[]);
        let mut events = RecordedEvents::default();

        toolbar.change_filter_value(FilterValue::text("cost"), &mut events);

        assert_eq!(events.filter_values, vec![FilterValue::text("cost")]);
        let fetch = &events.fetches[0];
        assert_eq!(fetch.offset, 0);
        assert_eq!(fetch.limit, 10);
        assert_eq!(fetch.order_by.as_deref(), Some("-modified"));
        assert_eq!(fetch.legacy.get("name"), Some(&FilterInput::from("cost")));
    }

    #[test]
    fn test_structured_filter_change_carries_filter_set() {
        let pagination = Pagination::new(20, 0, 3);
        let value = FilterValue::default();
        let filters = vec![Filter::text("username", "Username"), status_filter()];
        let toolbar = toolbar(&pagination, &value, &filters, &[]);
        let mut events = RecordedEvents::default();

        toolbar.change_filter("status", FilterInput::Many(vec!["Active".into()]), &mut events);

        assert_eq!(events.filters.len(), 1);
        assert!(events.filters[0][1].value.is_set());
        let fetched = events.fetches[0].filters.clone().unwrap();
        assert_eq!(fetched.get("status"), Some(&FilterInput::Many(vec!["Active".into()])));
        assert!(!fetched.contains_key("username"));
    }

    #[test]
    fn test_chips_and_chip_removal() {
        let pagination = Pagination::new(20, 0, 3);
        let value = FilterValue::default();
        let filters = vec![
            Filter::text("username", "Username").with_value("jd"),
            status_filter().with_value(FilterInput::Many(vec!["Active".into(), "Inactive".into()])),
        ];
        let toolbar = toolbar(&pagination, &value, &filters, &[]);

        let chips = toolbar.chips();
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[1].category, "Status");
        assert_eq!(chips[1].values, vec!["Active", "Inactive"]);

        let mut events = RecordedEvents::default();
        toolbar.remove_chip("status", "Active", &mut events);
        assert_eq!(
            events.filters[0][1].value,
            FilterInput::Many(vec!["Inactive".into()])
        );
    }

    #[test]
    fn test_clear_chips_resets_every_filter_and_restarts() {
        let pagination = Pagination::new(20, 40, 90);
        let value = FilterValue::text("cost");
        let filters = vec![
            Filter::text("username", "Username").with_value("jd"),
            status_filter().with_value(FilterInput::Many(vec!["Active".into()])),
        ];
        let toolbar = toolbar(&pagination, &value, &filters, &[]);
        let mut events = RecordedEvents::default();

        toolbar.clear_chips(&mut events);

        assert_eq!(events.filter_values, vec![FilterValue::default()]);
        assert_eq!(events.filters.len(), 1);
        assert!(events.filters[0].iter().all(|f| !f.value.is_set()));
        assert_eq!(events.fetches.len(), 1);
        let fetch = &events.fetches[0];
        assert_eq!(fetch.offset, 0);
        assert_eq!(fetch.limit, 20);
        assert_eq!(fetch.order_by.as_deref(), Some("-modified"));
        assert!(fetch.filter_fields().is_empty());
        assert!(fetch.filters.as_ref().is_some_and(|f| f.is_empty()));
    }

    #[test]
    fn test_text_chip_only_without_structured_filters() {
        let pagination = Pagination::default();
        let value = FilterValue::text("abc");
        let toolbar = toolbar(&pagination, &value, &[], &[]);
        assert_eq!(toolbar.chips()[0].values, vec!["abc"]);

        let mut events = RecordedEvents::default();
        toolbar.remove_chip("name", "abc", &mut events);
        assert_eq!(events.filter_values, vec![FilterValue::default()]);
    }

    #[test]
    fn test_selection_and_buttons() {
        let pagination = Pagination::default();
        let value = FilterValue::default();
        let buttons = vec![ToolbarButton::primary("create-role", "Create role")];
        let toolbar = toolbar(&pagination, &value, &[], &buttons);
        let mut events = RecordedEvents::default();

        assert_eq!(toolbar.selection_label().as_deref(), Some("2 selected"));
        assert_eq!(toolbar.placeholder(), "Filter by role");

        toolbar.press("create-role", &mut events);
        toolbar.press("unknown", &mut events);
        toolbar.select(Selection::Page, &mut events);
        assert_eq!(events.actions, vec!["create-role"]);
        assert_eq!(events.selections, vec![Selection::Page]);
    }

    #[test]
    fn test_top_pagination_matches_descriptor_rules() {
        let pagination = Pagination::new(10, 0, 30);
        let value = FilterValue::text("x");
        let toolbar = toolbar(&pagination, &value, &[], &[]);
        let descriptor = toolbar.top_pagination().set_page(2);
        assert_eq!(descriptor.offset, 10);
        assert_eq!(descriptor.order_by.as_deref(), Some("-modified"));
        assert_eq!(descriptor.legacy.get("name"), Some(&FilterInput::from("x")));
    }
}
