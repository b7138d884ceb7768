//! Headless data table: columns and rows, filtering, sorting and pagination,
//! and the render-state selection that the UI draws from.

pub mod action;
pub mod cell;
pub mod column;
pub mod fetch;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod store;
pub mod toolbar;
pub mod view;

pub use action::{TableAction, dispatch};
pub use cell::{Cell, Row};
pub use column::Column;
pub use fetch::FetchDescriptor;
pub use filter::{Filter, FilterInput, FilterItem, FilterKind, FilterValue};
pub use pagination::{Pagination, PaginationControls};
pub use sort::{SortBy, SortDirection};
pub use store::{ListPage, ListSource, RequestId, TableRow, TableStore, load};
pub use toolbar::{FilterChipGroup, Selection, Toolbar, ToolbarButton};
pub use view::{
    BodyCell, BodyRow, EmptyAction, EmptyState, HeaderCell, HeaderSort, ItemTitle, RenderState,
    TableFrame, TableView,
};

/// Callbacks raised by the table and its toolbar.
///
/// The owner of the table state implements this; the view itself never
/// mutates anything.
pub trait TableEvents {
    fn set_filter_value(&mut self, value: FilterValue);

    fn fetch_data(&mut self, descriptor: FetchDescriptor);

    fn on_sort(&mut self, column_index: usize, direction: SortDirection);

    /// Structured filters changed; tables with a single text box can ignore this
    fn set_filters(&mut self, _filters: Vec<Filter>) {}

    fn on_toolbar_action(&mut self, _key: &str) {}

    fn on_select(&mut self, _selection: Selection) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every callback in call order
    #[derive(Debug, Default)]
    pub struct RecordedEvents {
        pub filter_values: Vec<FilterValue>,
        pub filters: Vec<Vec<Filter>>,
        pub fetches: Vec<FetchDescriptor>,
        pub sorts: Vec<(usize, SortDirection)>,
        pub actions: Vec<String>,
        pub selections: Vec<Selection>,
    }

    impl TableEvents for RecordedEvents {
        fn set_filter_value(&mut self, value: FilterValue) {
            self.filter_values.push(value);
        }

        fn fetch_data(&mut self, descriptor: FetchDescriptor) {
            self.fetches.push(descriptor);
        }

        fn on_sort(&mut self, column_index: usize, direction: SortDirection) {
            self.sorts.push((column_index, direction));
        }

        fn set_filters(&mut self, filters: Vec<Filter>) {
            self.filters.push(filters);
        }

        fn on_toolbar_action(&mut self, key: &str) {
            self.actions.push(key.to_string());
        }

        fn on_select(&mut self, selection: Selection) {
            self.selections.push(selection);
        }
    }
}
