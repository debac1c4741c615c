//! Fields: named, validated units of user input.
//!
//! A [`Field`] owns the state shared by every variant (name, descriptions,
//! required flag, accepted value, last rejection, id). What differs between
//! variants lives behind the [`FieldKind`] trait.

mod button;
mod registry;
mod text;

pub use button::{Button, ButtonKind};
pub use registry::{FieldRegistry, KindFactory};
pub use text::{StringField, TextKind};

use std::any::Any;
use std::fmt;

use tracing::{debug, warn};

use crate::id::FieldId;
use crate::outcome::{FieldError, ValidationOutcome};

/// Behavior a field variant plugs into a [`Field`].
pub trait FieldKind: Send + Sync + fmt::Debug {
    /// Short tag naming the variant, e.g. `"string"`.
    fn tag(&self) -> &str;

    /// Checks a candidate value.
    ///
    /// `required` is the owning field's flag. On failure the error carries
    /// an optional message for the user.
    fn validate(&self, candidate: &str, required: bool) -> Result<(), Option<String>>;

    /// Value a field holds before anything was accepted.
    fn default_value(&self) -> String {
        String::new()
    }

    /// The `type` attribute of the rendered input, or `None` when the kind
    /// has no input of its own.
    fn input_type(&self) -> Option<&str> {
        None
    }

    /// Display form of an accepted value.
    fn show(&self, value: &str) -> String {
        value.to_string()
    }

    /// Upcast used by [`Field::kind_as`].
    fn as_any(&self) -> &dyn Any;

    /// Upcast used by [`Field::kind_as_mut`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A named input with a value, descriptions and validation state.
#[derive(Debug)]
pub struct Field {
    name: String,
    description: String,
    long_description: String,
    /// Whether an empty value is rejected.
    pub required: bool,
    value: String,
    last_error: Option<FieldError>,
    id: FieldId,
    kind: Box<dyn FieldKind>,
}

impl Field {
    /// Creates a field of the given kind holding the kind's default value.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
        kind: impl FieldKind + 'static,
    ) -> Self {
        Self::with_boxed_kind(name, description, long_description, Box::new(kind))
    }

    pub(crate) fn with_boxed_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
        kind: Box<dyn FieldKind>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            long_description: long_description.into(),
            required: false,
            value: kind.default_value(),
            last_error: None,
            id: FieldId::next(),
            kind,
        }
    }

    /// Creates a plain string field.
    pub fn string(
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        StringField::new(name, description, long_description).build()
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short description shown as the label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the long description shown as help text.
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// Returns the id used to tie the label to the input.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the field's kind.
    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }

    /// Returns the kind as `K` if it is one.
    pub fn kind_as<K: FieldKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref()
    }

    /// Returns the kind mutably as `K` if it is one.
    pub fn kind_as_mut<K: FieldKind + 'static>(&mut self) -> Option<&mut K> {
        self.kind.as_any_mut().downcast_mut()
    }

    /// Returns whether empty values are accepted.
    ///
    /// This is the inverse of [`Field::required`]; both name the same rule.
    pub fn can_be_empty(&self) -> bool {
        !self.required
    }

    /// Sets whether empty values are accepted.
    pub fn set_can_be_empty(&mut self, can_be_empty: bool) {
        self.required = !can_be_empty;
    }

    /// Validates `candidate` and stores it if it passes.
    ///
    /// A rejected value leaves the accepted value untouched and is kept as
    /// the field's last error until a later value is accepted.
    pub fn set_value(&mut self, candidate: impl Into<String>) -> ValidationOutcome {
        let candidate = candidate.into();
        match self.kind.validate(&candidate, self.required) {
            Ok(()) => {
                debug!(field = %self.name, "value accepted");
                self.value.clone_from(&candidate);
                self.last_error = None;
                ValidationOutcome::Accepted(candidate)
            }
            Err(message) => {
                warn!(field = %self.name, ?message, "value rejected");
                let error = FieldError {
                    value: candidate,
                    message,
                };
                self.last_error = Some(error.clone());
                ValidationOutcome::Rejected(error)
            }
        }
    }

    /// Returns the value to work with.
    ///
    /// Unless `prefer_raw` is set, a pending rejection wins so the user sees
    /// what they typed; with `prefer_raw` the last accepted value is
    /// returned.
    pub fn get_value(&self, prefer_raw: bool) -> &str {
        match &self.last_error {
            Some(error) if !prefer_raw => &error.value,
            _ => &self.value,
        }
    }

    /// Returns the value to re-display: the rejected candidate if any.
    pub fn value(&self) -> &str {
        self.get_value(false)
    }

    /// Returns the last accepted value.
    pub fn accepted_value(&self) -> &str {
        self.get_value(true)
    }

    /// Returns the accepted value formatted for display.
    pub fn show(&self) -> String {
        self.kind.show(&self.value)
    }

    /// Returns the last rejection, if it is still pending.
    pub fn error(&self) -> Option<&FieldError> {
        self.last_error.as_ref()
    }

    /// Returns whether a rejection is pending.
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Flags the field with an error found outside its own validation.
    pub fn set_error(&mut self, error: FieldError) {
        self.last_error = Some(error);
    }

    /// Drops a pending rejection.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
