use crate::app::components::{EmptyState, MessageItem};
use crate::domain::models::Conversation;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::eval as js_eval;

#[component]
pub fn ChatMessages(conversation: Signal<Conversation>, assistant_name: String) -> Element {
    // Auto-scroll to bottom when messages change
    use_effect(move || {
        let count = conversation.read().len();
        if count > 0 {
            #[cfg(target_arch = "wasm32")]
            {
                let script = r#"
                    setTimeout(() => {
                        const messagesEnd = document.getElementById('messages-end');
                        if (messagesEnd) {
                            messagesEnd.scrollIntoView({ behavior: 'smooth' });
                        }
                    }, 50);
                "#;
                let _ = js_eval(script);
            }
        }
    });

    let conversation = conversation.read();

    rsx! {
        div { class: "c-chat-messages",
            if conversation.is_empty() {
                EmptyState {
                    icon: "💬",
                    title: "Start a conversation",
                    description: "Send a message to begin chatting with {assistant_name}",
                }
            } else {
                ul { class: "c-chat-messages__list",
                    for (index, message) in conversation.messages.iter().enumerate() {
                        MessageItem {
                            key: "{index}",
                            message: message.clone(),
                            assistant_name: assistant_name.clone(),
                        }
                    }
                }
                div { id: "messages-end" }
            }
        }
    }
}
