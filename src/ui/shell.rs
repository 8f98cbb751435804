use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "logo",
                Link { to: Route::Home {}, "RLAMA" }
            }
            nav {
                Link { to: Route::Home {}, "Dashboard" }
                Link { to: Route::Create {}, "Create" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { "RLAMA - Retrieval-augmented chat over your documents" }
        }
    }
}
