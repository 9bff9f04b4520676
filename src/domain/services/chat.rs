use crate::domain::models::{ChatMessage, Conversation};
use crate::domain::services::{validate_input, ChatResponder};
use crate::shared::errors::Result;
use crate::shared::logging::{log_input_rejected, log_message_sent, log_reply};

/// Append a user message and the responder's reply to `conversation`
///
/// Nothing is appended when the input is rejected.
pub fn submit_message(
    conversation: &mut Conversation,
    raw_input: &str,
    max_chars: usize,
    responder: &dyn ChatResponder,
) -> Result<()> {
    let content = validate_input(raw_input, max_chars).inspect_err(|e| {
        log_input_rejected(&e.to_string());
    })?;

    let chars = content.chars().count();
    conversation.push(ChatMessage::user(content));
    log_message_sent(&conversation.id, chars, conversation.len());

    let reply = responder.respond(conversation);
    conversation.push(reply);
    log_reply(&conversation.id, responder.name());

    Ok(())
}
