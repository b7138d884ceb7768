use crate::components::button::ButtonVariant;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::loader::ListLoader;
use crate::widgets::pagination::PaginationBar;
use crate::widgets::toolbar::Toolbar;
use dioxus::prelude::*;
use rbac::table::{
    BodyRow, EmptyAction, HeaderCell, RenderState, SortDirection, TableAction, TableFrame,
    TableView,
};

/// Filterable, sortable, paginated table with its toolbar.
///
/// Draws whichever [`RenderState`] the view is in; every interaction is
/// reported through `on_action` for the owning page to dispatch.
#[component]
pub fn TableToolbarView(view: TableView, on_action: EventHandler<TableAction>) -> Element {
    if let Err(e) = view.validate() {
        warn!("Table {} misconfigured: {}", view.ouia_id, e);
    }

    match view.render_state() {
        RenderState::InitialEmpty(empty) => {
            let (label, action) = match empty.action {
                Some(EmptyAction::Toolbar(button)) => {
                    (Some(button.label), Some(TableAction::Toolbar(button.key)))
                }
                Some(EmptyAction::ClearFilters { label }) => {
                    (Some(label), Some(TableAction::ClearAllFilters))
                }
                None => (None, None),
            };
            rsx! {
                EmptyState {
                    icon: "🔑".to_string(),
                    title: empty.title,
                    description: empty.description,
                    action_label: label,
                    on_action: Some(EventHandler::new(move |_| {
                        if let Some(action) = action.clone() {
                            on_action.call(action);
                        }
                    })),
                }
            }
        }
        RenderState::Loading { rows } => rsx! {
            Toolbar { view: view.clone(), on_action }
            ListLoader { rows, compact: view.is_compact }
        },
        RenderState::FilteredEmpty { frame, empty } => {
            let colspan = frame.headers.len().max(1);
            let label = match empty.action {
                Some(EmptyAction::ClearFilters { label }) => Some(label),
                _ => None,
            };
            rsx! {
                Toolbar { view: view.clone(), on_action }
                TableFrameView { frame: frame.clone(), on_action,
                    tr {
                        td { colspan: "{colspan}",
                            EmptyState {
                                icon: "🔍".to_string(),
                                title: empty.title,
                                description: empty.description,
                                action_label: label,
                                action_variant: ButtonVariant::Link,
                                compact: true,
                                on_action: Some(EventHandler::new(move |_| on_action.call(TableAction::ClearAllFilters))),
                            }
                        }
                    }
                }
            }
        }
        RenderState::Populated { frame, rows } => rsx! {
            Toolbar { view: view.clone(), on_action }
            TableFrameView { frame, on_action,
                for (i, row) in rows.into_iter().enumerate() {
                    BodyRowView { key: "{i}", row }
                }
            }
        },
    }
}

#[component]
fn TableFrameView(frame: TableFrame, on_action: EventHandler<TableAction>, children: Element) -> Element {
    let class = if frame.is_compact { "table compact" } else { "table" };
    rsx! {
        table {
            class: "{class}",
            aria_label: "{frame.aria_label}",
            "data-ouia-component-id": "{frame.ouia_id}",
            thead {
                tr {
                    for header in frame.headers.clone() {
                        HeaderView { header, on_action }
                    }
                }
            }
            tbody { {children} }
        }
        if let Some(controls) = frame.bottom_pagination.clone() {
            PaginationBar { controls, variant: "bottom", on_action }
        }
    }
}

#[component]
fn HeaderView(header: HeaderCell, on_action: EventHandler<TableAction>) -> Element {
    let index = header.index;
    match header.sort {
        None => rsx! {
            th { "{header.title}" }
        },
        Some(sort) => {
            let aria_sort = match (sort.is_active, sort.direction) {
                (false, _) => "none",
                (true, SortDirection::Asc) => "ascending",
                (true, SortDirection::Desc) => "descending",
            };
            rsx! {
                th { class: "sortable", aria_sort,
                    button {
                        class: "sort-button",
                        onclick: move |_| on_action.call(TableAction::Sort(index)),
                        "{header.title}"
                        if sort.is_active {
                            span { class: "sort-indicator",
                                if sort.direction == SortDirection::Asc { "▲" } else { "▼" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BodyRowView(row: BodyRow) -> Element {
    let class = if row.selected { "selected" } else { "" };
    rsx! {
        tr { class,
            for body_cell in row.cells {
                td { "data-label": "{body_cell.data_label}",
                    match body_cell.cell.href() {
                        Some(href) => rsx! {
                            a { href: "{href}", "{body_cell.cell}" }
                        },
                        None => rsx! { "{body_cell.cell}" },
                    }
                }
            }
        }
    }
}
