//! String fields.

use std::any::Any;
use std::fmt;

use super::{Field, FieldKind};
use crate::render::html_escape;
use crate::validation::{self, MaxLengthValidator, MinLengthValidator, Validator};

/// Kind for single-line text input.
///
/// The owning field's `required` flag is the only emptiness rule: an empty
/// value is rejected when it is set and accepted, without consulting the
/// extra validators, when it is not. Whitespace is not empty.
#[derive(Default)]
pub struct TextKind {
    /// Escape the value in [`Field::show`].
    ///
    /// Affects display only; the value stored and echoed back into the
    /// input is never altered.
    pub decode_html: bool,
    validators: Vec<Box<dyn Validator>>,
}

impl fmt::Debug for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextKind")
            .field("decode_html", &self.decode_html)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl TextKind {
    /// Creates a text kind with no extra validators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator run on non-empty values.
    pub fn push_validator(&mut self, validator: impl Validator + 'static) {
        self.validators.push(Box::new(validator));
    }
}

impl FieldKind for TextKind {
    fn tag(&self) -> &str {
        "string"
    }

    fn validate(&self, candidate: &str, required: bool) -> Result<(), Option<String>> {
        if candidate.is_empty() {
            return if required {
                Err(Some("This field is required.".to_string()))
            } else {
                Ok(())
            };
        }
        match validation::first_failure(&self.validators, candidate) {
            Some(message) => Err(Some(message)),
            None => Ok(()),
        }
    }

    fn input_type(&self) -> Option<&str> {
        Some("text")
    }

    fn show(&self, value: &str) -> String {
        if self.decode_html {
            html_escape(value)
        } else {
            value.to_string()
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Builder for string fields.
#[derive(Debug)]
pub struct StringField {
    name: String,
    description: String,
    long_description: String,
    required: bool,
    initial: Option<String>,
    kind: TextKind,
}

impl StringField {
    /// Starts a string field definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            long_description: long_description.into(),
            required: false,
            initial: None,
            kind: TextKind::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets whether empty values are accepted; the inverse of `required`.
    #[must_use]
    pub fn can_be_empty(mut self, can_be_empty: bool) -> Self {
        self.required = !can_be_empty;
        self
    }

    /// Escapes the value when shown.
    #[must_use]
    pub fn decode_html(mut self) -> Self {
        self.kind.decode_html = true;
        self
    }

    /// Sets the initial value, stored without validation.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.kind.push_validator(validator);
        self
    }

    /// Limits the value to `max` characters.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.validator(MaxLengthValidator::new(max))
    }

    /// Requires at least `min` characters in a non-empty value.
    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.validator(MinLengthValidator::new(min))
    }

    /// Finishes the definition.
    pub fn build(self) -> Field {
        let mut field = Field::new(self.name, self.description, self.long_description, self.kind);
        field.required = self.required;
        if let Some(initial) = self.initial {
            field.value = initial;
        }
        field
    }
}
