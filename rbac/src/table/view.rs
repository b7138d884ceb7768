use super::TableEvents;
use super::cell::{Cell, Row};
use super::column::Column;
use super::fetch::FetchDescriptor;
use super::filter::{self, Filter, FilterValue, NAME_FILTER};
use super::pagination::{Pagination, PaginationControls};
use super::sort::{SortBy, SortDirection};
use super::toolbar::{Toolbar, ToolbarButton};
use crate::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Skeleton rows shown while loading when the page size is unknown
const DEFAULT_LOADER_ROWS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTitle {
    pub singular: String,
    pub plural: String,
}

impl ItemTitle {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyAction {
    /// First toolbar button, normally "Create ..."
    Toolbar(ToolbarButton),
    ClearFilters { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub description: Vec<String>,
    pub action: Option<EmptyAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSort {
    pub is_active: bool,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub index: usize,
    pub title: String,
    /// `None` for columns that cannot be sorted
    pub sort: Option<HeaderSort>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub data_label: String,
    pub cell: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub cells: Vec<BodyCell>,
    pub selected: bool,
}

/// Table chrome shared by the filtered-empty and populated states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFrame {
    pub aria_label: String,
    pub ouia_id: String,
    pub is_compact: bool,
    pub headers: Vec<HeaderCell>,
    pub bottom_pagination: Option<PaginationControls>,
}

/// What the table shows for the current props. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing configured yet and nothing filtered: call to action
    InitialEmpty(EmptyState),
    Loading { rows: u32 },
    /// Filters are active but matched nothing
    FilteredEmpty { frame: TableFrame, empty: EmptyState },
    Populated { frame: TableFrame, rows: Vec<BodyRow> },
}

impl RenderState {
    pub fn name(&self) -> &'static str {
        match self {
            RenderState::InitialEmpty(_) => "initial-empty",
            RenderState::Loading { .. } => "loading",
            RenderState::FilteredEmpty { .. } => "filtered-empty",
            RenderState::Populated { .. } => "populated",
        }
    }
}

/// Props of a filterable, sortable, paginated table.
///
/// The view is a pure function of these props. Container state (rows,
/// pagination, filters) lives with whoever implements [`TableEvents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub ouia_id: String,
    pub title: ItemTitle,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub pagination: Pagination,
    pub filters: Vec<Filter>,
    pub filter_value: FilterValue,
    /// Value restored by "Clear all filters"; `None` clears to `name: ""`
    pub empty_filters: Option<FilterValue>,
    pub sort_by: SortBy,
    pub is_loading: bool,
    pub is_selectable: bool,
    pub is_compact: bool,
    pub toolbar_buttons: Vec<ToolbarButton>,
    pub filter_placeholder: Option<String>,
    pub hide_filter_chips: bool,
    pub no_data: bool,
    pub no_data_description: Vec<String>,
}

impl TableView {
    pub fn new(ouia_id: impl Into<String>, title: ItemTitle, columns: Vec<Column>) -> Self {
        Self {
            ouia_id: ouia_id.into(),
            title,
            columns,
            rows: Vec::new(),
            pagination: Pagination::default(),
            filters: Vec::new(),
            filter_value: FilterValue::default(),
            empty_filters: None,
            sort_by: SortBy::unsorted(),
            is_loading: false,
            is_selectable: false,
            is_compact: false,
            toolbar_buttons: Vec::new(),
            filter_placeholder: None,
            hide_filter_chips: false,
            no_data: false,
            no_data_description: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_filter_value(mut self, value: FilterValue) -> Self {
        self.filter_value = value;
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_toolbar_buttons(mut self, buttons: Vec<ToolbarButton>) -> Self {
        self.toolbar_buttons = buttons;
        self
    }

    /// Checks the row/column invariants the renderer relies on
    pub fn validate(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.sortable && column.key.is_none() {
                return Err(RbacError::MissingSortKey(index));
            }
        }
        for (row, r) in self.rows.iter().enumerate() {
            if r.cells.len() != self.columns.len() {
                return Err(RbacError::RowShapeMismatch {
                    row,
                    cells: r.cells.len(),
                    columns: self.columns.len(),
                });
            }
        }
        Ok(())
    }

    pub fn order_by(&self) -> Option<String> {
        self.sort_by.order_by(&self.columns)
    }

    pub fn is_initial_empty(&self) -> bool {
        !self.is_loading
            && self.rows.is_empty()
            && self.filter_value.is_empty()
            && !filter::any_filter_set(&self.filters)
    }

    pub fn render_state(&self) -> RenderState {
        let state = if self.is_initial_empty() {
            RenderState::InitialEmpty(self.initial_empty())
        } else if self.is_loading {
            RenderState::Loading {
                rows: match self.pagination.limit {
                    0 => DEFAULT_LOADER_ROWS,
                    limit => limit,
                },
            }
        } else if self.rows.is_empty() {
            RenderState::FilteredEmpty {
                frame: self.frame(),
                empty: self.filtered_empty(),
            }
        } else {
            RenderState::Populated {
                frame: self.frame(),
                rows: self.body_rows(),
            }
        };
        debug!(table = %self.ouia_id, state = state.name(), "table render state");
        state
    }

    /// Toolbar for every state except the initial empty one
    pub fn toolbar(&self) -> Toolbar<'_> {
        Toolbar {
            pagination: &self.pagination,
            filter_value: &self.filter_value,
            filters: &self.filters,
            order_by: self.order_by(),
            buttons: &self.toolbar_buttons,
            title_singular: &self.title.singular,
            filter_placeholder: self.filter_placeholder.as_deref(),
            is_selectable: self.is_selectable,
            selected_count: self.rows.iter().filter(|r| r.selected).count(),
            is_disabled: self.is_loading || self.no_data,
            hide_filter_chips: self.hide_filter_chips,
        }
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderCell {
                index,
                title: column.title.clone(),
                sort: column.sortable.then(|| HeaderSort {
                    is_active: self.sort_by.is_active() && self.sort_by.index == index,
                    direction: self.sort_by.direction,
                }),
            })
            .collect()
    }

    /// Bottom pagination; hidden while loading and when `no_bottom` is set
    pub fn bottom_pagination(&self) -> Option<PaginationControls> {
        if self.is_loading || self.pagination.no_bottom {
            return None;
        }
        Some(PaginationControls::build(
            &self.pagination,
            &self.filter_value,
            self.order_by().as_deref(),
        ))
    }

    /// Header click: asks the owner to sort by `column_index`.
    /// Returns `false` for columns that are not sortable.
    pub fn sort_column(&self, column_index: usize, events: &mut dyn TableEvents) -> bool {
        match self.columns.get(column_index) {
            Some(column) if column.sortable => {
                events.on_sort(column_index, self.sort_by.next_direction(column_index));
                true
            }
            _ => false,
        }
    }

    /// "Clear all filters" from the filtered-empty state
    pub fn clear_all_filters(&self, events: &mut dyn TableEvents) {
        let empty = self.empty_filters.clone().unwrap_or_default();
        let mut descriptor = FetchDescriptor::from_pagination(&self.pagination).with_offset(0);
        descriptor = match &self.empty_filters {
            Some(empty_filters) => descriptor.with_filter_value(empty_filters),
            None => descriptor.with_field(NAME_FILTER, ""),
        };
        events.set_filter_value(empty);
        if !self.filters.is_empty() {
            events.set_filters(filter::cleared(&self.filters));
        }
        events.fetch_data(descriptor);
    }

    fn frame(&self) -> TableFrame {
        TableFrame {
            aria_label: format!("{} table", self.title.plural.to_lowercase()),
            ouia_id: self.ouia_id.clone(),
            is_compact: self.is_compact,
            headers: self.headers(),
            bottom_pagination: self.bottom_pagination(),
        }
    }

    fn body_rows(&self) -> Vec<BodyRow> {
        self.rows
            .iter()
            .map(|row| BodyRow {
                selected: row.selected,
                cells: row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| BodyCell {
                        data_label: self
                            .columns
                            .get(j)
                            .map(|c| c.title.clone())
                            .unwrap_or_default(),
                        cell: cell.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn initial_empty(&self) -> EmptyState {
        EmptyState {
            title: format!("Configure {}", self.title.plural.to_lowercase()),
            description: vec![
                "To configure user access to applications,".to_string(),
                format!(
                    "create at least one {}.",
                    self.title.singular.to_lowercase()
                ),
            ],
            action: self.toolbar_buttons.first().cloned().map(EmptyAction::Toolbar),
        }
    }

    fn filtered_empty(&self) -> EmptyState {
        let plural = self.title.plural.to_lowercase();
        let title = format!("No matching {plural} found");
        if self.no_data && !self.no_data_description.is_empty() {
            return EmptyState {
                title,
                description: self.no_data_description.clone(),
                action: None,
            };
        }
        EmptyState {
            title,
            description: vec![
                format!("This filter criteria matches no {plural}."),
                "Try changing your filter settings.".to_string(),
            ],
            action: Some(EmptyAction::ClearFilters {
                label: "Clear all filters".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::filter::FilterInput;
    use crate::table::testing::RecordedEvents;

    fn name_table() -> TableView {
        TableView::new(
            "users-table",
            ItemTitle::new("User", "Users"),
            vec![Column::sortable("Name", "name")],
        )
        .with_pagination(Pagination::new(10, 0, 1))
        .with_toolbar_buttons(vec![ToolbarButton::primary("create", "Create user")])
    }

    fn roles_table() -> TableView {
        TableView::new(
            "roles-table",
            ItemTitle::new("Role", "Roles"),
            vec![
                Column::new(""),
                Column::sortable("Name", "name"),
                Column::new("Description"),
                Column::sortable("Last modified", "modified"),
            ],
        )
        .with_pagination(Pagination::new(10, 0, 2))
    }

    #[test]
    fn test_single_row_renders_populated_table() {
        let view = name_table().with_rows(vec![Row::new(["Alice"])]);

        let RenderState::Populated { frame, rows } = view.render_state() else {
            panic!("expected populated table");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0].cell.text(), "Alice");
        assert_eq!(rows[0].cells[0].data_label, "Name");
        assert_eq!(frame.aria_label, "users table");
        let pagination = frame.bottom_pagination.unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_count(), 1);
        assert_eq!(pagination.summary(), "1 - 1 of 1");
    }

    #[test]
    fn test_no_rows_and_no_filters_is_initial_empty() {
        let view = name_table().with_filter_value(FilterValue::text(""));

        let RenderState::InitialEmpty(empty) = view.render_state() else {
            panic!("expected initial empty state");
        };
        assert_eq!(empty.title, "Configure users");
        assert_eq!(
            empty.action,
            Some(EmptyAction::Toolbar(ToolbarButton::primary("create", "Create user")))
        );
    }

    #[test]
    fn test_no_rows_with_filter_text_is_filtered_empty() {
        let view = name_table().with_filter_value(FilterValue::text("abc"));

        let RenderState::FilteredEmpty { empty, .. } = view.render_state() else {
            panic!("expected filtered empty state");
        };
        assert_eq!(empty.title, "No matching users found");
        assert!(matches!(empty.action, Some(EmptyAction::ClearFilters { .. })));
    }

    #[test]
    fn test_no_rows_with_structured_filter_is_filtered_empty() {
        let view = name_table()
            .with_filters(vec![Filter::text("email", "Email").with_value("a@b.c")]);
        assert_eq!(view.render_state().name(), "filtered-empty");
    }

    #[test]
    fn test_empty_rows_pick_exactly_one_empty_state() {
        let filter_values = [FilterValue::default(), FilterValue::text("abc")];
        let filter_sets = [
            vec![],
            vec![Filter::text("email", "Email")],
            vec![Filter::text("email", "Email").with_value("x")],
        ];
        for value in &filter_values {
            for filters in &filter_sets {
                let view = name_table()
                    .with_filter_value(value.clone())
                    .with_filters(filters.clone());
                let any_filter = !value.is_empty() || filters.iter().any(|f| f.value.is_set());
                let expected = if any_filter { "filtered-empty" } else { "initial-empty" };
                assert_eq!(view.render_state().name(), expected);
            }
        }
    }

    #[test]
    fn test_loading_wins_over_rows_and_filters() {
        for rows in [vec![], vec![Row::new(["Alice"])]] {
            for value in [FilterValue::default(), FilterValue::text("abc")] {
                let view = name_table()
                    .with_rows(rows.clone())
                    .with_filter_value(value)
                    .with_loading(true);
                assert_eq!(view.render_state(), RenderState::Loading { rows: 10 });
                assert!(view.bottom_pagination().is_none());
                assert!(view.toolbar().is_disabled);
            }
        }
    }

    #[test]
    fn test_no_bottom_hides_bottom_pagination() {
        let mut view = name_table().with_rows(vec![Row::new(["Alice"])]);
        view.pagination.no_bottom = true;
        let RenderState::Populated { frame, .. } = view.render_state() else {
            panic!("expected populated table");
        };
        assert!(frame.bottom_pagination.is_none());
    }

    #[test]
    fn test_sortable_header_click_and_order_by() {
        let view = roles_table().with_rows(vec![
            Row::new(["", "Admins", "", "today"]),
            Row::new(["", "Viewers", "", "today"]),
        ]);
        let mut events = RecordedEvents::default();

        for (index, column) in view.columns.iter().enumerate().filter(|(i, c)| *i > 0 && c.sortable) {
            assert!(view.sort_column(index, &mut events));
            assert_eq!(events.sorts.last(), Some(&(index, SortDirection::Asc)));

            let key = column.key.clone().unwrap();
            let asc = view.clone().with_sort(SortBy::new(index, SortDirection::Asc));
            assert_eq!(asc.order_by(), Some(key.clone()));
            let desc = view.clone().with_sort(SortBy::new(index, SortDirection::Desc));
            assert_eq!(desc.order_by(), Some(format!("-{key}")));
        }

        assert!(!view.sort_column(2, &mut events));
        assert_eq!(events.sorts.len(), 2);
    }

    #[test]
    fn test_first_column_sort_produces_no_order_by() {
        // Index 0 doubles as "unsorted"; the first column can never drive orderBy.
        let view = name_table().with_rows(vec![Row::new(["Alice"])]);
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(view.clone().with_sort(SortBy::new(0, direction)).order_by(), None);
        }
    }

    #[test]
    fn test_unsorted_first_column_header_is_inactive() {
        let view = name_table().with_rows(vec![Row::new(["Alice"])]);
        let sort = view.headers()[0].sort.unwrap();
        assert!(!sort.is_active);
        assert_eq!(view.order_by(), None);

        let mut events = RecordedEvents::default();
        assert!(view.sort_column(0, &mut events));
        assert_eq!(events.sorts, vec![(0, SortDirection::Asc)]);
    }

    #[test]
    fn test_active_header_toggles_direction() {
        let view = roles_table()
            .with_rows(vec![Row::new(["", "Admins", "", "today"])])
            .with_sort(SortBy::new(1, SortDirection::Asc));
        let headers = view.headers();
        assert!(headers[1].sort.unwrap().is_active);
        assert!(headers[2].sort.is_none());

        let mut events = RecordedEvents::default();
        view.sort_column(1, &mut events);
        assert_eq!(events.sorts, vec![(1, SortDirection::Desc)]);
    }

    #[test]
    fn test_clear_all_filters_resets_and_fetches_first_page() {
        let mut view = name_table()
            .with_pagination(Pagination::new(10, 20, 0))
            .with_filter_value(FilterValue::fields([("username", "jd"), ("email", "")]))
            .with_filters(vec![Filter::text("username", "Username").with_value("jd")]);
        view.empty_filters = Some(FilterValue::fields([("username", ""), ("email", "")]));
        let mut events = RecordedEvents::default();

        view.clear_all_filters(&mut events);

        assert_eq!(events.filter_values, vec![view.empty_filters.clone().unwrap()]);
        assert!(!events.filters[0][0].value.is_set());
        let fetch = &events.fetches[0];
        assert_eq!(fetch.offset, 0);
        assert_eq!(fetch.limit, 10);
        assert_eq!(fetch.legacy.get("username"), Some(&FilterInput::from("")));
    }

    #[test]
    fn test_clear_all_filters_without_empty_filters_clears_name() {
        let view = name_table().with_filter_value(FilterValue::text("abc"));
        let mut events = RecordedEvents::default();

        view.clear_all_filters(&mut events);

        assert_eq!(events.filter_values, vec![FilterValue::default()]);
        assert_eq!(events.fetches[0].legacy.get("name"), Some(&FilterInput::from("")));
        assert_eq!(events.fetches[0].offset, 0);
    }

    #[test]
    fn test_no_data_description_replaces_clear_action() {
        let mut view = name_table().with_filter_value(FilterValue::text("abc"));
        view.no_data = true;
        view.no_data_description = vec!["No users in this group.".to_string()];

        let RenderState::FilteredEmpty { empty, .. } = view.render_state() else {
            panic!("expected filtered empty state");
        };
        assert_eq!(empty.description, vec!["No users in this group."]);
        assert!(empty.action.is_none());
        assert!(view.toolbar().is_disabled);
    }

    #[test]
    fn test_validate_reports_shape_mismatch() {
        let view = name_table().with_rows(vec![Row::new(["Alice", "extra"])]);
        assert!(matches!(
            view.validate(),
            Err(RbacError::RowShapeMismatch { row: 0, cells: 2, columns: 1 })
        ));

        let mut view = name_table();
        view.columns.push(Column {
            title: "Email".into(),
            key: None,
            sortable: true,
        });
        assert!(matches!(view.validate(), Err(RbacError::MissingSortKey(1))));
    }
}
