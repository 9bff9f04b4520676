pub mod button;
pub mod card;
pub mod chat_input;
pub mod chat_messages;
pub mod common;
pub mod message_item;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use chat_input::ChatInput;
pub use chat_messages::ChatMessages;
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use message_item::{render_markdown, MessageItem};
