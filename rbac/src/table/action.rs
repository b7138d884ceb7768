use super::TableEvents;
use super::filter::{FilterInput, FilterValue};
use super::toolbar::Selection;
use super::view::TableView;

/// A user interaction with a table, as raised by the rendered widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    FilterText(String),
    Filter { key: String, value: FilterInput },
    RemoveChip { key: String, value: String },
    ClearChips,
    /// "Clear all filters" from the filtered-empty state
    ClearAllFilters,
    Sort(usize),
    SetPage(u32),
    PerPage(u32),
    Toolbar(String),
    Select(Selection),
}

/// Routes `action` to the view operation that handles it.
///
/// Top and bottom pagination both page through the same controls, so they
/// produce identical descriptors.
pub fn dispatch(view: &TableView, action: TableAction, events: &mut dyn TableEvents) {
    let toolbar = view.toolbar();
    match action {
        TableAction::FilterText(text) => toolbar.change_filter_value(FilterValue::Text(text), events),
        TableAction::Filter { key, value } => toolbar.change_filter(&key, value, events),
        TableAction::RemoveChip { key, value } => toolbar.remove_chip(&key, &value, events),
        TableAction::ClearChips => toolbar.clear_chips(events),
        TableAction::ClearAllFilters => view.clear_all_filters(events),
        TableAction::Sort(index) => {
            view.sort_column(index, events);
        }
        TableAction::SetPage(page) => events.fetch_data(toolbar.top_pagination().set_page(page)),
        TableAction::PerPage(per_page) => {
            events.fetch_data(toolbar.top_pagination().per_page_select(per_page))
        }
        TableAction::Toolbar(key) => toolbar.press(&key, events),
        TableAction::Select(selection) => toolbar.select(selection, events),
    }
}
