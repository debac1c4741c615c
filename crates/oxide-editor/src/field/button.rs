//! Buttons.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Field, FieldKind};
use crate::id::FieldId;

/// How a button is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// A plain button with no default action.
    #[default]
    Button,
    /// Submits the form.
    Submit,
    /// Resets the form.
    Reset,
    /// A hidden value sent with the form.
    Hidden,
}

impl ButtonKind {
    /// Returns the `type` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldKind for ButtonKind {
    fn tag(&self) -> &str {
        self.as_str()
    }

    fn validate(&self, _candidate: &str, _required: bool) -> Result<(), Option<String>> {
        Ok(())
    }

    fn input_type(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A form action trigger.
///
/// Buttons have no descriptions and accept any value; the value is the
/// caption shown on the button.
#[derive(Debug)]
pub struct Button {
    field: Field,
}

impl Button {
    /// Name of the submit button added when a form has none.
    pub const DEFAULT_SUBMIT_NAME: &'static str = "edit";
    /// Name of the reset button added when a form has none.
    pub const DEFAULT_RESET_NAME: &'static str = "reset";

    /// Creates a button.
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ButtonKind) -> Self {
        let mut field = Field::new(name, "", "", kind);
        field.value = value.into();
        Self { field }
    }

    /// Creates a submit button.
    pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ButtonKind::Submit)
    }

    /// Creates a reset button.
    pub fn reset(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ButtonKind::Reset)
    }

    /// Creates a hidden value.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ButtonKind::Hidden)
    }

    /// The `edit`/`OK` submit button.
    pub fn default_submit() -> Self {
        Self::submit(Self::DEFAULT_SUBMIT_NAME, "OK")
    }

    /// The `reset`/`Reset` button.
    pub fn default_reset() -> Self {
        Self::reset(Self::DEFAULT_RESET_NAME, "Reset")
    }

    /// Returns the button name.
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Returns the caption.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Replaces the caption.
    pub fn set_value(&mut self, value: impl Into<String>) {
        // Buttons accept every value.
        let _ = self.field.set_value(value);
    }

    /// Returns the button kind.
    pub fn kind(&self) -> ButtonKind {
        // The field is only ever built by `Button::new` with a `ButtonKind`.
        self.field
            .kind_as::<ButtonKind>()
            .copied()
            .unwrap_or_default()
    }

    /// Returns the id used in rendering.
    pub fn id(&self) -> FieldId {
        self.field.id()
    }

    /// Returns whether this button submits the form.
    pub fn is_submit(&self) -> bool {
        self.kind() == ButtonKind::Submit
    }

    /// Returns the underlying field.
    pub fn as_field(&self) -> &Field {
        &self.field
    }
}
