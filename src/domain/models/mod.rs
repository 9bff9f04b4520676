// Domain models
// Pure Rust, no framework dependencies

pub mod message;

pub use message::{ChatMessage, Conversation, LogLevel};
