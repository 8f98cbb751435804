use dioxus::prelude::*;

pub mod api;
pub mod config;
mod md2rsx;
pub mod state;
mod ui;

use api::{ApiHandle, HttpRagApi};
use config::AppConfig;
use ui::chat::Chat;
use ui::create::Create;
use ui::home::Home;
use ui::shell::{Footer, Header};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    use_context_provider(|| ApiHandle::new(HttpRagApi::new(&config)));
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/create")]
    Create {},
    #[route("/chat/:rag_name")]
    Chat { rag_name: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Header and footer around every page.
#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app-container",
            Header {}
            main { class: "main-content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
