//! Message rendering component
//!
//! Displays individual messages in the chat window

use crate::domain::models::{ChatMessage, LogLevel};
use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders a single message
#[component]
pub fn MessageItem(message: ChatMessage, assistant_name: String) -> Element {
    match message {
        ChatMessage::User { content, timestamp } => rsx! {
            li { class: "c-chat-message c-chat-message--user animate-fade-in",
                div { class: "c-chat-bubble c-chat-bubble--user",
                    div { class: "c-chat-bubble__content u-whitespace-pre-wrap", {content} }
                    span { class: "c-chat-bubble__timestamp",
                        {timestamp.format("%H:%M").to_string()}
                    }
                }
            }
        },
        ChatMessage::Assistant { content, timestamp, model } => {
            let html_content = render_markdown(&content);
            let author = model.unwrap_or(assistant_name);
            rsx! {
                li { class: "c-chat-message c-chat-message--assistant animate-fade-in",
                    div { class: "c-chat-bubble c-chat-bubble--assistant",
                        span { class: "c-chat-bubble__author", "{author}" }
                        div {
                            class: "c-chat-bubble__content c-prose",
                            dangerous_inner_html: "{html_content}"
                        }
                        span { class: "c-chat-bubble__timestamp",
                            {timestamp.format("%H:%M").to_string()}
                        }
                    }
                }
            }
        }
        ChatMessage::System { content, timestamp, level } => {
            let (icon, level_class) = match level {
                Some(LogLevel::Error) => ("❌", "error"),
                Some(LogLevel::Warn) => ("⚠️", "warn"),
                Some(LogLevel::Info) => ("ℹ️", "info"),
                Some(LogLevel::Debug) => ("🐛", "debug"),
                None => ("⚙️", "default"),
            };
            rsx! {
                li { class: "c-chat-message c-chat-message--system c-chat-message--{level_class}",
                    span { class: "c-chat-message__icon", "{icon}" }
                    span { class: "c-chat-message__text", "{content}" }
                    span { class: "c-chat-message__timestamp",
                        {timestamp.format("%H:%M:%S").to_string()}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basics() {
        let html = render_markdown("**bold** and `code`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_markdown_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
