//! Declarative form configuration.
//!
//! A [`FormConfig`] describes a form as data so it can be kept in a JSON
//! document instead of code:
//!
//! ```json
//! {
//!   "title": "Test-Form",
//!   "script_target": "index.php",
//!   "method": "post",
//!   "fields": [
//!     { "kind": "string", "name": "test", "description": "Test", "required": true }
//!   ],
//!   "buttons": [
//!     { "name": "save", "value": "Save", "kind": "submit" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{Button, ButtonKind, FieldRegistry, TextKind};
use crate::form::{Form, Method};

fn default_kind() -> String {
    "string".to_string()
}

/// One field of a [`FormConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Registry tag of the field kind.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Field name.
    pub name: String,
    /// Label text.
    #[serde(default)]
    pub description: String,
    /// Help text.
    #[serde(default)]
    pub long_description: String,
    /// Whether an empty value is rejected.
    #[serde(default)]
    pub required: bool,
    /// Escape the value when shown. Only meaningful for string fields.
    #[serde(default)]
    pub decode_html: bool,
    /// Initial value, set through validation.
    #[serde(default)]
    pub initial: Option<String>,
}

/// One button of a [`FormConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Button name.
    pub name: String,
    /// Caption.
    pub value: String,
    /// How the button renders.
    #[serde(default)]
    pub kind: ButtonKind,
}

/// A whole form described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Form title.
    pub title: String,
    /// Submission endpoint.
    pub script_target: String,
    /// HTTP method, `post` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    /// Fields in display order.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    /// Buttons in display order. When empty, the form gets its default
    /// submit and reset buttons.
    #[serde(default)]
    pub buttons: Vec<ButtonConfig>,
}

impl FormConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the form, resolving field kinds through `registry`.
    ///
    /// Initial values go through the field's validation; a rejected one is
    /// left on the field as its pending error.
    pub fn build(&self, registry: &FieldRegistry) -> Result<Form> {
        let mut form = Form::new();
        form.set_title(self.title.clone());
        form.set_script_target(self.script_target.clone());
        if let Some(method) = self.method {
            form.set_method(method);
        }

        for entry in &self.fields {
            let mut field = registry.create(
                &entry.kind,
                entry.name.clone(),
                entry.description.clone(),
                entry.long_description.clone(),
            )?;
            field.required = entry.required;
            if let Some(kind) = field.kind_as_mut::<TextKind>() {
                kind.decode_html = entry.decode_html;
            }
            if let Some(initial) = &entry.initial {
                let _ = field.set_value(initial.clone());
            }
            form.add_field(field);
        }

        for entry in &self.buttons {
            form.add_button(Button::new(entry.name.clone(), entry.value.clone(), entry.kind));
        }

        Ok(form)
    }
}
