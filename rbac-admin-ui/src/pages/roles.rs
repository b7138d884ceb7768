use super::list::{apply_action, current_view, start_fetch};
use crate::Route;
use crate::api::ApiClient;
use crate::widgets::table_view::TableToolbarView;
use dioxus::prelude::*;
use dioxus_primitives::toast::{Toasts, use_toast};
use rbac::access::{RoleSummary, role_columns};
use rbac::query::TableQuery;
use rbac::table::{
    FetchDescriptor, ItemTitle, SortBy, SortDirection, TableAction, TableStore, TableView,
    ToolbarButton,
};

const CREATE_ROLE: &str = "create-role";

fn base_view() -> TableView {
    TableView::new("RolesTable", ItemTitle::new("Role", "Roles"), role_columns())
        .with_toolbar_buttons(vec![ToolbarButton::primary(CREATE_ROLE, "Create role")])
}

fn load(
    store: Signal<TableStore<RoleSummary>>,
    toaster: Toasts,
    api: ApiClient,
    descriptor: FetchDescriptor,
) {
    start_fetch(store, toaster, descriptor, move |d| async move {
        api.fetch_roles(&d).await
    });
}

#[component]
pub fn Roles(query: String) -> Element {
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let nav = navigator();
    let store = use_signal(|| {
        TableQuery::from_query(&query).store(
            role_columns(),
            Vec::new(),
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
        if action == TableAction::Toolbar(CREATE_ROLE.to_string()) {
            let from = TableQuery::from_descriptor(&store.read().current_descriptor());
            nav.push(Route::AddRole { query: from.to_query() });
            return;
        }
        if let Some(descriptor) = apply_action(store, &base_view(), action) {
            nav.replace(Route::Roles {
                query: TableQuery::from_descriptor(&descriptor).to_query(),
            });
            load(store, toaster, api.clone(), descriptor);
        }
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Roles" }
            }
            TableToolbarView { view: current_view(store, base_view()), on_action }
        }
    }
}
