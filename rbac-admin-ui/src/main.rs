use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod pages;
mod widgets;

use components::toast::ToastProvider;
use pages::{AddRole, MyUserAccess, Roles, Users};
use widgets::{header::Header, sidebar::Sidebar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[redirect("/", || Route::MyUserAccess { query: String::new() })]
    #[route("/my-user-access?:..query")]
    MyUserAccess { query: String },
    #[route("/users?:..query")]
    Users { query: String },
    #[route("/roles?:..query")]
    Roles { query: String },
    #[route("/roles/add-role?:..query")]
    AddRole { query: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_client = api::ApiClient::new();
    use_context_provider(|| api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}

/// Sidebar, header and the routed page.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "app-main",
                Header {}
                main { class: "app-content", Outlet::<Route> {} }
            }
        }
    }
}
