use std::rc::Rc;

use crate::domain::models::Conversation;
use crate::domain::services::{submit_message, ChatResponder};
use dioxus::prelude::*;

/// Chat state shared between the chat layout and the chat window
#[derive(Clone)]
pub struct ChatState {
    pub conversation: Signal<Conversation>,
    pub input: Signal<String>,
    pub error: Signal<Option<String>>,
    pub max_input_chars: usize,
    responder: Rc<dyn ChatResponder>,
}

impl ChatState {
    /// Send the current input. On rejection the error is kept for display.
    pub fn submit(&mut self) {
        let raw = self.input.read().clone();
        let result = submit_message(
            &mut self.conversation.write(),
            &raw,
            self.max_input_chars,
            self.responder.as_ref(),
        );

        match result {
            Ok(()) => {
                self.input.set(String::new());
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    /// Start over with an empty conversation
    pub fn reset(&mut self) {
        self.conversation.set(Conversation::new());
        self.input.set(String::new());
        self.error.set(None);
    }

    /// Drop a pending validation error (e.g. once the user edits the input)
    pub fn clear_error(&mut self) {
        if self.error.read().is_some() {
            self.error.set(None);
        }
    }
}

/// Hook to create chat state. `make_responder` runs once per mount.
pub fn use_chat_state(
    max_input_chars: usize,
    make_responder: impl FnOnce() -> Rc<dyn ChatResponder>,
) -> ChatState {
    let conversation = use_signal(Conversation::new);
    let input = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let responder = use_hook(make_responder);

    ChatState {
        conversation,
        input,
        error,
        max_input_chars,
        responder,
    }
}
