// crates/core/src/error.rs
use thiserror::Error;

/// Errors from the insight generator.
///
/// An empty repository list is NOT an error — every metric degrades to a
/// zero-division-safe default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsightError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = InsightError::InvalidInput("username must not be blank".to_string());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("blank"));
    }
}
