use crate::app::components::{Button, ButtonVariant};
use crate::shared::hooks::ChatState;
use dioxus::prelude::*;

const TITLE_CHARS: usize = 40;

/// Chat sidebar: current conversation and a way to start a new one
#[component]
pub fn ChatSidebar() -> Element {
    let chat_state = use_context::<ChatState>();
    let mut reset_state = chat_state.clone();

    let conversation = chat_state.conversation.read();
    let title = conversation.title(TITLE_CHARS);
    let message_count = conversation.len();

    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__header",
                h2 { "Conversation" }
            }
            div { class: "c-sidebar__actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    title: "Clear the current conversation",
                    onclick: move |_| reset_state.reset(),
                    "✚ New chat"
                }
            }
            nav { class: "c-sidebar__nav",
                div { class: "c-sidebar__item c-sidebar__item--active",
                    span { class: "c-sidebar__item-icon", "💬" }
                    span { class: "c-sidebar__item-text", "{title}" }
                    span { class: "c-sidebar__count", "{message_count}" }
                }
            }
        }
    }
}
