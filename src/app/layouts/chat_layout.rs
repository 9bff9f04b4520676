use std::rc::Rc;

use crate::app::layouts::{ChatSidebar, Navbar};
use crate::app::routes::{Route, View};
use crate::config::AppConfig;
use crate::domain::services::{ChatResponder, OfflineResponder};
use crate::shared::hooks::use_chat_state;
use crate::shared::logging::log_view_mounted;
use dioxus::prelude::*;

/// Layout for `/chat`: navbar, sidebar and the child view in the outlet
#[component]
pub fn ChatLayout() -> Element {
    let config = use_context::<AppConfig>();
    let assistant_name = config.assistant_name.clone();

    let chat_state = use_chat_state(config.max_input_chars, move || {
        Rc::new(OfflineResponder::new(assistant_name)) as Rc<dyn ChatResponder>
    });
    use_context_provider(|| chat_state);

    use_hook(|| log_view_mounted(View::ChatLayout.as_str()));

    rsx! {
        div { class: "c-layout",
            Navbar {}

            div { class: "c-layout__body",
                ChatSidebar {}

                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
