use super::list::{apply_action, current_view, start_fetch};
use crate::Route;
use crate::api::ApiClient;
use crate::widgets::table_view::TableToolbarView;
use dioxus::prelude::*;
use dioxus_primitives::toast::{Toasts, use_toast};
use rbac::access::{Principal, principal_columns, principal_filters};
use rbac::query::TableQuery;
use rbac::table::{
    FetchDescriptor, FilterInput, FilterValue, ItemTitle, SortBy, SortDirection, TableAction,
    TableStore, TableView,
};

fn base_view() -> TableView {
    let mut view = TableView::new("UsersTable", ItemTitle::new("User", "Users"), principal_columns());
    view.is_compact = true;
    view.empty_filters = Some(FilterValue::fields([
        ("username", FilterInput::from("")),
        ("email", FilterInput::from("")),
        ("status", FilterInput::Many(Vec::new())),
    ]));
    view
}

fn load(
    store: Signal<TableStore<Principal>>,
    toaster: Toasts,
    api: ApiClient,
    descriptor: FetchDescriptor,
) {
    start_fetch(store, toaster, descriptor, move |d| async move {
        api.fetch_principals(&d).await
    });
}

#[component]
pub fn Users(query: String) -> Element {
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let nav = navigator();
    let store = use_signal(|| {
        TableQuery::from_query(&query).store(
            principal_columns(),
            principal_filters(),
            SortBy::new(1, SortDirection::Asc),
        )
    });

    use_hook({
        let api = api.clone();
        move || {
            let descriptor = store.read().current_descriptor();
            load(store, toaster, api, descriptor);
        }
    });

    let on_action = move |action: TableAction| {
        if let Some(descriptor) = apply_action(store, &base_view(), action) {
            nav.replace(Route::Users {
                query: TableQuery::from_descriptor(&descriptor).to_query(),
            });
            load(store, toaster, api.clone(), descriptor);
        }
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Users" }
            }
            TableToolbarView { view: current_view(store, base_view()), on_action }
        }
    }
}
