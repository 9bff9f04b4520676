use crate::app::components::{ChatInput, ChatMessages, ErrorMessage};
use crate::app::routes::View;
use crate::config::AppConfig;
use crate::shared::hooks::ChatState;
use crate::shared::logging::log_view_mounted;
use dioxus::prelude::*;

/// Default child of `/chat`, rendered inside the chat layout
#[component]
pub fn ChatWindow() -> Element {
    let config = use_context::<AppConfig>();
    let chat_state = use_context::<ChatState>();

    use_hook(|| log_view_mounted(View::ChatWindow.as_str()));

    let mut submit_state = chat_state.clone();
    let mut edit_state = chat_state.clone();
    let error = chat_state.error.read().clone();

    rsx! {
        div { class: "c-chat-window",
            ChatMessages {
                conversation: chat_state.conversation,
                assistant_name: config.assistant_name.clone(),
            }

            if let Some(error_text) = error {
                ErrorMessage { message: error_text }
            }

            ChatInput {
                input: chat_state.input,
                max_chars: chat_state.max_input_chars,
                on_submit: move |_| submit_state.submit(),
                on_edit: move |_| edit_state.clear_error(),
            }
        }
    }
}
