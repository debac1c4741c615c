//! Error types for the editor.

use thiserror::Error;

/// Editor-specific errors.
///
/// A rejected field value is not an error: it is recorded on the field as a
/// [`FieldError`](crate::FieldError) and surfaced when the form is rendered.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The form cannot be rendered or handle submissions yet.
    #[error("invalid form configuration: {0}")]
    InvalidConfig(String),

    /// No field registered under the given name.
    #[error("no field named {0:?}")]
    FieldNotFound(String),

    /// No button registered under the given name.
    #[error("no button named {0:?}")]
    ButtonNotFound(String),

    /// The field registry has no factory for the given type tag.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// A URL-encoded submission body could not be decoded.
    #[error("failed to parse submission: {0}")]
    InvalidSubmission(#[from] serde_urlencoded::de::Error),

    /// A form configuration document could not be parsed.
    #[error("failed to parse form configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EditorError::InvalidConfig("no title set".to_string());
        assert_eq!(err.to_string(), "invalid form configuration: no title set");

        let err = EditorError::FieldNotFound("email".to_string());
        assert_eq!(err.to_string(), r#"no field named "email""#);
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EditorError = json_err.into();
        assert!(matches!(err, EditorError::Config(_)));
    }
}
