use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Duplicate route path at the same level: {0}")]
    DuplicatePath(String),

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is too long: {len} characters (max {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
