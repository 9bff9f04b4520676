use crate::app::routes::Route;
use crate::config::AppConfig;
use dioxus::prelude::*;

/// Top bar shared by the home page and the chat layout
#[component]
pub fn Navbar() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "💬 {config.title}"
            }

            div { class: "c-navbar__links",
                Link {
                    to: Route::Home {},
                    class: "c-navbar__link",
                    active_class: "c-navbar__link--active",
                    "Home"
                }
                Link {
                    to: Route::ChatWindow {},
                    class: "c-navbar__link",
                    active_class: "c-navbar__link--active",
                    "Chat"
                }
            }
        }
    }
}
