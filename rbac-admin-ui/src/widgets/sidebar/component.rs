use crate::Route;
use dioxus::prelude::*;
use rbac::query::TableQuery;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let per_page = use_context::<crate::api::ApiClient>().config().default_per_page;
    let query = TableQuery::first_page(per_page).to_query();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "User Access" }
            }
            nav { class: "sidebar-nav",
                Link {
                    to: Route::MyUserAccess { query: String::new() },
                    class: if current_path.starts_with("/my-user-access") { "nav-item active" } else { "nav-item" },
                    "My user access"
                }
                Link {
                    to: Route::Users { query: query.clone() },
                    class: if current_path.starts_with("/users") { "nav-item active" } else { "nav-item" },
                    "Users"
                }
                Link {
                    to: Route::Roles { query },
                    class: if current_path.starts_with("/roles") { "nav-item active" } else { "nav-item" },
                    "Roles"
                }
            }
        }
    }
}
