use crate::Route;
use dioxus::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, EnumCount, EnumIter, Display, EnumString)]
enum UserAction {
    #[strum(serialize = "my-user-access", to_string = "My user access")]
    MyUserAccess,
    #[strum(serialize = "roles", to_string = "Roles")]
    Roles,
    #[strum(serialize = "users", to_string = "Users")]
    Users,
}

impl UserAction {
    fn value(&self) -> &'static str {
        match self {
            UserAction::MyUserAccess => "my-user-access",
            UserAction::Roles => "roles",
            UserAction::Users => "users",
        }
    }

    fn route(&self, per_page: u32) -> Route {
        let query = rbac::query::TableQuery::first_page(per_page).to_query();
        match self {
            UserAction::MyUserAccess => Route::MyUserAccess { query: String::new() },
            UserAction::Roles => Route::Roles { query },
            UserAction::Users => Route::Users { query },
        }
    }
}

#[component]
pub fn Header() -> Element {
    let nav = navigator();
    let per_page = use_context::<crate::api::ApiClient>().config().default_per_page;

    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "User Access" }
            div { class: "header-actions",
                select {
                    aria_label: "User menu",
                    onchange: move |e: Event<FormData>| {
                        match UserAction::from_str(&e.value()) {
                            Ok(action) => {
                                info!("User menu: {}", action);
                                nav.push(action.route(per_page));
                            }
                            Err(_) => warn!("Unknown user menu entry {}", e.value()),
                        }
                    },
                    option { value: "", disabled: true, selected: true, "Go to" }
                    for action in UserAction::iter() {
                        option { value: action.value(), "{action}" }
                    }
                }
            }
        }
    }
}
