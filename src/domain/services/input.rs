use crate::shared::errors::{AppError, Result};

/// Trim and check a raw input value before it becomes a user message
pub fn validate_input(raw: &str, max_chars: usize) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let len = trimmed.chars().count();
    if len > max_chars {
        return Err(AppError::MessageTooLong { len, max: max_chars });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate_input("  hello \n", 100).unwrap(), "hello");
    }

    #[test]
    fn test_rejects_blank_input() {
        assert_eq!(validate_input("", 100), Err(AppError::EmptyMessage));
        assert_eq!(validate_input(" \n\t ", 100), Err(AppError::EmptyMessage));
    }

    #[test]
    fn test_length_limit_applies_after_trim() {
        assert!(validate_input("  abcde  ", 5).is_ok());
        assert_eq!(
            validate_input("abcdef", 5),
            Err(AppError::MessageTooLong { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(validate_input("ééééé", 5).is_ok());
    }
}
