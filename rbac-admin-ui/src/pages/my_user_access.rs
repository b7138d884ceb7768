use crate::Route;
use crate::api::ApiClient;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::tabs::{TabItem, Tabs};
use dioxus::prelude::*;
use rbac::bundles::{BUNDLE_PARAM, Bundle, BundleRoute, resolve_bundle};
use rbac::query::create_query_params;
use rbac::table::FilterInput;
use rbac::wizard::Permission;
use strum::IntoEnumIterator;

fn bundle_route(bundle: &str) -> Route {
    let value = FilterInput::from(bundle);
    Route::MyUserAccess {
        query: create_query_params([(BUNDLE_PARAM, &value)]),
    }
}

#[component]
pub fn MyUserAccess(query: String) -> Element {
    let nav = navigator();
    let route = resolve_bundle(&query);
    let tabs: Vec<TabItem> = Bundle::iter()
        .map(|bundle| TabItem {
            id: bundle.to_string(),
            label: bundle.title().to_string(),
            badge: Some(bundle.applications().len()),
        })
        .collect();
    let active_tab = match route {
        BundleRoute::Bundle(bundle) => bundle.to_string(),
        BundleRoute::Placeholder => String::new(),
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "My user access" }
            }
            Tabs {
                items: tabs,
                active_tab,
                on_tab_change: move |id: String| {
                    nav.push(bundle_route(&id));
                },
            }
            div { class: "tab-content",
                match route {
                    BundleRoute::Bundle(bundle) => rsx! { BundlePermissions { bundle } },
                    BundleRoute::Placeholder => rsx! {
                        EmptyState {
                            icon: "📦".to_string(),
                            title: "Select a bundle".to_string(),
                            description: vec!["Choose a bundle to see the permissions you have in it.".to_string()],
                            action_label: None,
                            on_action: None,
                        }
                    },
                }
            }
        }
    }
}

/// Permissions of the current user that belong to `bundle`'s applications
#[component]
fn BundlePermissions(bundle: Bundle) -> Element {
    let api = use_context::<ApiClient>();
    let permissions = use_resource(move || {
        let api = api.clone();
        async move { api.list_permissions().await }
    });
    let applications = bundle.applications();

    rsx! {
        h2 { "{bundle.title()}" }
        match &*permissions.read() {
            None => rsx! { p { "Loading permissions..." } },
            Some(Err(e)) => rsx! { p { class: "wizard-error", "Failed to load permissions: {e}" } },
            Some(Ok(list)) => {
                let rows: Vec<Permission> = list
                    .iter()
                    .filter_map(|p| p.permission.parse::<Permission>().ok())
                    .filter(|p| applications.contains(&p.application.as_str()))
                    .collect();
                if rows.is_empty() {
                    rsx! {
                        EmptyState {
                            icon: "🔒".to_string(),
                            title: "No permissions".to_string(),
                            description: vec![format!("You have no permissions in {}.", bundle.title())],
                            action_label: None,
                            on_action: None,
                        }
                    }
                } else {
                    rsx! {
                        table { class: "table compact", aria_label: "permissions table",
                            thead {
                                tr {
                                    th { "Application" }
                                    th { "Resource type" }
                                    th { "Operation" }
                                }
                            }
                            tbody {
                                for permission in rows {
                                    tr { key: "{permission}",
                                        td { "{permission.application}" }
                                        td { "{permission.resource_type}" }
                                        td { "{permission.verb}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
