//! Results of setting a field's value.

use std::fmt;

use serde::Serialize;

/// A rejected candidate value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The value the user attempted to set.
    pub value: String,
    /// Why the value was rejected, if the validator said.
    pub message: Option<String>,
}

impl FieldError {
    /// Creates an error without a message.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: None,
        }
    }

    /// Creates an error with a message.
    pub fn with_message(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: Some(message.into()),
        }
    }

    /// Returns the message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "invalid value {:?}", self.value),
        }
    }
}

/// Outcome of [`Field::set_value`](crate::Field::set_value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
#[must_use]
pub enum ValidationOutcome {
    /// The value passed validation and is now the field's value.
    Accepted(String),
    /// The value failed validation; the field kept its previous value.
    Rejected(FieldError),
}

impl ValidationOutcome {
    /// Returns whether the value was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns whether the value was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the candidate value, accepted or not.
    pub fn value(&self) -> &str {
        match self {
            Self::Accepted(value) => value,
            Self::Rejected(error) => &error.value,
        }
    }

    /// Returns the rejection, if any.
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(error) => Some(error),
        }
    }
}
