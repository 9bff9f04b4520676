//! Reply seam for the chat window
//!
//! Producing assistant replies belongs to an external backend. The window
//! only talks to a [`ChatResponder`]; the shipped [`OfflineResponder`] says
//! that nothing is connected.

use crate::domain::models::{ChatMessage, Conversation, LogLevel};

pub trait ChatResponder {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Produce the message that follows the last user message of `conversation`
    fn respond(&self, conversation: &Conversation) -> ChatMessage;
}

#[derive(Debug, Clone)]
pub struct OfflineResponder {
    assistant_name: String,
}

impl OfflineResponder {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
        }
    }
}

impl ChatResponder for OfflineResponder {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn respond(&self, _conversation: &Conversation) -> ChatMessage {
        ChatMessage::system(
            format!(
                "{} is not connected to a backend. Your message was kept in this conversation.",
                self.assistant_name
            ),
            LogLevel::Info,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_reply_is_info_system_message() {
        let responder = OfflineResponder::new("Ada");
        let mut conversation = Conversation::new();
        conversation.push(ChatMessage::user("ping"));

        let reply = responder.respond(&conversation);
        match reply {
            ChatMessage::System { content, level, .. } => {
                assert!(content.starts_with("Ada is not connected"));
                assert_eq!(level, Some(LogLevel::Info));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
        assert_eq!(responder.name(), "offline");
    }
}
