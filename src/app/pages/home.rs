use crate::app::components::Card;
use crate::app::layouts::Navbar;
use crate::app::routes::{Route, View};
use crate::config::AppConfig;
use crate::shared::logging::log_view_mounted;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();

    use_hook(|| log_view_mounted(View::Home.as_str()));

    rsx! {
        div { class: "c-layout",
            Navbar {}

            main { class: "c-home",
                header { class: "c-home__hero",
                    h1 { class: "c-home__title", "{config.title}" }
                    p { class: "c-home__description",
                        "Ask {config.assistant_name} anything. Conversations stay in this window."
                    }
                    Link {
                        to: Route::ChatWindow {},
                        class: "c-button c-button--primary c-home__cta",
                        "Start chatting →"
                    }
                }

                div { class: "c-home__cards",
                    Card { icon: "⌨️", title: "Keyboard first",
                        p { "Enter sends, Shift+Enter adds a new line." }
                    }
                    Card { icon: "📝", title: "Markdown replies",
                        p { "Code, tables and lists are rendered in the chat." }
                    }
                    Card { icon: "✚", title: "Fresh start",
                        p { "Clear the conversation from the sidebar at any time." }
                    }
                }
            }
        }
    }
}
