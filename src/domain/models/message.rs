use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Log level for system messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Message in a chat conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatMessage {
    User {
        content: String,
        timestamp: DateTime<Utc>,
    },
    Assistant {
        content: String,
        timestamp: DateTime<Utc>,
        #[serde(default)]
        model: Option<String>,
    },
    System {
        content: String,
        timestamp: DateTime<Utc>,
        #[serde(default)]
        level: Option<LogLevel>,
    },
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: content.into(),
            timestamp: Utc::now(),
            model: None,
        }
    }

    pub fn system(content: impl Into<String>, level: LogLevel) -> Self {
        ChatMessage::System {
            content: content.into(),
            timestamp: Utc::now(),
            level: Some(level),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ChatMessage::User { content, .. }
            | ChatMessage::Assistant { content, .. }
            | ChatMessage::System { content, .. } => content,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ChatMessage::User { timestamp, .. }
            | ChatMessage::Assistant { timestamp, .. }
            | ChatMessage::System { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, ChatMessage::User { .. })
    }
}

/// Conversation (collection of messages)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Title for the sidebar: the first user message, truncated to `max_chars`
    pub fn title(&self, max_chars: usize) -> String {
        let Some(first) = self.messages.iter().find(|m| m.is_user()) else {
            return "New conversation".to_string();
        };

        let content = first.content().trim();
        if content.chars().count() > max_chars {
            format!("{}...", content.chars().take(max_chars).collect::<String>())
        } else {
            content.to_string()
        }
    }
}
