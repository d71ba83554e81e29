//! Error types for color parsing.

use thiserror::Error;

/// Error type for hex color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 6 or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,
}

/// Result type alias using [`ColorParseError`].
pub type Result<T> = std::result::Result<T, ColorParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(ColorParseError::EmptyInput.to_string(), "empty input");
        assert_eq!(
            ColorParseError::InvalidLength(5).to_string(),
            "invalid hex length: 5 (expected 6 or 8)"
        );
        assert_eq!(
            ColorParseError::InvalidHexChar.to_string(),
            "invalid hex character"
        );
    }
}
