// Custom Dioxus hooks
pub mod use_chat_state;

pub use use_chat_state::{use_chat_state, ChatState};
