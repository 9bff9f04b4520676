// Chat services
// Framework-agnostic, 100% testable

pub mod chat;
pub mod input;
pub mod responder;

pub use chat::submit_message;
pub use input::validate_input;
pub use responder::{ChatResponder, OfflineResponder};
