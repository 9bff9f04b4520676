use crate::app::layouts::Navbar;
use crate::app::routes::Route;
use crate::shared::logging::log_route_not_found;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    let logged_path = path.clone();
    use_hook(move || log_route_not_found(&logged_path));

    rsx! {
        div { class: "c-layout",
            Navbar {}

            main { class: "c-not-found",
                h1 { "Page not found" }
                p { "Nothing lives at " code { "{path}" } "." }
                Link { to: Route::Home {}, class: "breadcrumb-link", "← Back to Home" }
            }
        }
    }
}
