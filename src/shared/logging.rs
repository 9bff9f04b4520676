//! Structured logging for the chat front end
//!
//! Every event carries an `operation` field so logs can be filtered by
//! concern. Native builds install a `tracing-subscriber`; in the browser the
//! Dioxus launcher forwards `tracing` events to the console.

/// Operation tags attached to log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Startup,
    RouteTable,
    Navigation,
    ChatInput,
    ChatReply,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Startup => "startup",
            LogOperation::RouteTable => "route_table",
            LogOperation::Navigation => "navigation",
            LogOperation::ChatInput => "chat_input",
            LogOperation::ChatReply => "chat_reply",
        }
    }
}

/// Install the global subscriber (native only)
///
/// `filter` is an `EnvFilter` directive such as `info` or
/// `chat_router=debug`. An invalid directive falls back to `info`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// Log application start
pub fn log_startup(title: &str, route_count: usize) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        title = title,
        route_count = route_count,
        "Starting chat front end"
    );
}

/// Log a successful route table validation
pub fn log_route_table_valid(record_count: usize, leaf_count: usize) {
    tracing::debug!(
        operation = LogOperation::RouteTable.as_str(),
        record_count = record_count,
        leaf_count = leaf_count,
        "Route table validated"
    );
}

/// Log a view being mounted by the router
pub fn log_view_mounted(view: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        view = view,
        "View mounted"
    );
}

/// Log a navigation that fell through to the fallback view
pub fn log_route_not_found(path: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "No route matched, showing fallback view"
    );
}

/// Log rejected chat input
pub fn log_input_rejected(reason: &str) {
    tracing::debug!(
        operation = LogOperation::ChatInput.as_str(),
        reason = reason,
        "Chat input rejected"
    );
}

/// Log an accepted user message
pub fn log_message_sent(conversation_id: &str, chars: usize, message_count: usize) {
    tracing::info!(
        operation = LogOperation::ChatInput.as_str(),
        conversation_id = conversation_id,
        chars = chars,
        message_count = message_count,
        "User message added"
    );
}

/// Log the reply produced by the responder
pub fn log_reply(conversation_id: &str, responder: &str) {
    tracing::debug!(
        operation = LogOperation::ChatReply.as_str(),
        conversation_id = conversation_id,
        responder = responder,
        "Reply appended"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Startup.as_str(), "startup");
        assert_eq!(LogOperation::RouteTable.as_str(), "route_table");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ChatInput.as_str(), "chat_input");
        assert_eq!(LogOperation::ChatReply.as_str(), "chat_reply");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_init_twice_is_harmless() {
        init("not a [valid directive");
        init("debug");
        log_startup("test", 3);
    }
}
