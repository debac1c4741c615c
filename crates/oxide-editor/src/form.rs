//! The form container and its submit → validate → render cycle.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::FormConfig;
use crate::error::{EditorError, Result};
use crate::field::{Button, Field, FieldRegistry};
use crate::outcome::FieldError;
use crate::render::{HtmlRenderer, Renderer};
use crate::submission::Submission;

/// HTTP method the form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    #[default]
    Post,
}

impl Method {
    /// Returns the method as used in the `method` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered, name-keyed collection of fields and buttons.
///
/// Fields and buttons live in separate namespaces. Adding an entry under a
/// name that is already taken replaces the old entry in its original
/// position.
///
/// The configuration must pass [`Form::validate_config`] before the form
/// handles submissions or renders; both do so implicitly.
#[derive(Debug, Default)]
pub struct Form {
    title: String,
    script_target: String,
    method: Option<Method>,
    fields: IndexMap<String, Field>,
    buttons: IndexMap<String, Button>,
    config_valid: bool,
}

impl Form {
    /// Creates an unconfigured form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from a declarative configuration.
    pub fn from_config(config: &FormConfig, registry: &FieldRegistry) -> Result<Self> {
        config.build(registry)
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.config_valid = false;
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Returns the submission endpoint.
    pub fn script_target(&self) -> &str {
        &self.script_target
    }

    /// Sets the submission endpoint unless one is already set.
    ///
    /// Returns whether the target was set.
    pub fn set_script_target(&mut self, target: impl Into<String>) -> bool {
        if !self.script_target.is_empty() {
            return false;
        }
        self.script_target = target.into();
        self.config_valid = false;
        true
    }

    /// Sets the submission endpoint unless one is already set.
    #[must_use]
    pub fn with_script_target(mut self, target: impl Into<String>) -> Self {
        self.set_script_target(target);
        self
    }

    /// Returns the method, `post` unless set otherwise.
    pub fn method(&self) -> Method {
        self.method.unwrap_or_default()
    }

    /// Sets the method.
    pub fn set_method(&mut self, method: Method) {
        self.method = Some(method);
    }

    /// Sets the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.set_method(method);
        self
    }

    /// Adds a field, replacing any field with the same name.
    pub fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name().to_string(), field);
        self.config_valid = false;
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Adds a button, replacing any button with the same name.
    pub fn add_button(&mut self, button: Button) {
        self.buttons.insert(button.name().to_string(), button);
        self.config_valid = false;
    }

    /// Adds a button.
    #[must_use]
    pub fn with_button(mut self, button: Button) -> Self {
        self.add_button(button);
        self
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| EditorError::FieldNotFound(name.to_string()))
    }

    /// Returns a field by name for modification.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| EditorError::FieldNotFound(name.to_string()))
    }

    /// Returns a button by name.
    pub fn button(&self, name: &str) -> Result<&Button> {
        self.buttons
            .get(name)
            .ok_or_else(|| EditorError::ButtonNotFound(name.to_string()))
    }

    /// Returns a button by name for modification.
    pub fn button_mut(&mut self, name: &str) -> Result<&mut Button> {
        self.buttons
            .get_mut(name)
            .ok_or_else(|| EditorError::ButtonNotFound(name.to_string()))
    }

    /// Iterates over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Iterates over the buttons in insertion order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.values()
    }

    /// Iterates over the field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over the button names in insertion order.
    pub fn button_names(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the number of buttons.
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns whether the configuration has been validated since it last
    /// changed.
    pub fn is_config_valid(&self) -> bool {
        self.config_valid
    }

    /// Checks the configuration.
    ///
    /// Requires a title and a script target and rejects entries with empty
    /// names. Adds the default submit and reset buttons when the form has
    /// no buttons at all. Running it again after it passed changes nothing.
    pub fn validate_config(&mut self) -> Result<()> {
        if self.config_valid {
            return Ok(());
        }

        if self.script_target.is_empty() {
            warn!("form has no script target");
            return Err(EditorError::InvalidConfig("no script target set".to_string()));
        }
        if self.title.is_empty() {
            warn!(script_target = %self.script_target, "form has no title");
            return Err(EditorError::InvalidConfig("no title set".to_string()));
        }
        if self.fields.contains_key("") || self.buttons.contains_key("") {
            warn!(title = %self.title, "form has an entry without a name");
            return Err(EditorError::InvalidConfig(
                "field or button without a name".to_string(),
            ));
        }

        if self.method.is_none() {
            self.method = Some(Method::Post);
        }

        if self.buttons.is_empty() {
            debug!(title = %self.title, "adding default submit and reset buttons");
            for button in [Button::default_submit(), Button::default_reset()] {
                self.buttons.insert(button.name().to_string(), button);
            }
        }

        self.config_valid = true;
        debug!(
            title = %self.title,
            script_target = %self.script_target,
            method = %self.method(),
            fields = self.fields.len(),
            buttons = self.buttons.len(),
            "form configuration validated"
        );
        Ok(())
    }

    /// Returns whether `submission` was sent by one of this form's submit
    /// buttons.
    pub fn is_edit_submission(&self, submission: &Submission) -> bool {
        self.buttons
            .values()
            .any(|b| b.is_submit() && submission.contains(b.name()))
    }

    /// Handles one submission.
    ///
    /// Returns `Ok(false)` and leaves every field alone unless the
    /// submission names one of the form's submit buttons. Otherwise hands
    /// each submitted value to its field; rejected values stay on their
    /// fields and do not stop the others.
    pub fn handle_submission(&mut self, submission: &Submission) -> Result<bool> {
        self.validate_config()?;

        if !self.is_edit_submission(submission) {
            debug!(title = %self.title, "no recognized action in submission");
            return Ok(false);
        }

        let rejected = self.handle_edit(submission);
        debug!(title = %self.title, rejected, "edit submission handled");
        Ok(true)
    }

    /// Sets every field present in `submission` and returns how many
    /// rejected their value.
    ///
    /// Fields missing from the submission keep their value.
    fn handle_edit(&mut self, submission: &Submission) -> usize {
        let mut rejected = 0;
        for (name, field) in &mut self.fields {
            if let Some(raw) = submission.get(name) {
                if field.set_value(raw).is_rejected() {
                    rejected += 1;
                }
            }
        }
        rejected
    }

    /// Returns whether any field holds a rejected value.
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(Field::has_error)
    }

    /// Returns the pending rejections in field order.
    pub fn errors(&self) -> IndexMap<&str, &FieldError> {
        self.fields
            .iter()
            .filter_map(|(name, field)| field.error().map(|e| (name.as_str(), e)))
            .collect()
    }

    /// Renders the form as HTML.
    pub fn render(&mut self) -> Result<String> {
        self.render_with(&HtmlRenderer::default())
    }

    /// Renders the form with the given renderer.
    pub fn render_with<R: Renderer + ?Sized>(&mut self, renderer: &R) -> Result<String> {
        self.validate_config()?;
        Ok(renderer.render_form(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ButtonKind, StringField};

    fn configured() -> Form {
        Form::new()
            .with_title("Test-Form")
            .with_script_target("index.php")
    }

    #[test]
    fn test_missing_target() {
        let mut form = Form::new().with_title("Test-Form");
        let err = form.validate_config().unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(ref m) if m.contains("script target")));
        assert!(!form.is_config_valid());
    }

    #[test]
    fn test_missing_title() {
        let mut form = Form::new().with_script_target("index.php");
        let err = form.validate_config().unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(ref m) if m.contains("title")));
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let mut form = configured().with_field(Field::string("", "Nameless", ""));
        assert!(form.validate_config().is_err());
    }

    #[test]
    fn test_method_defaults_to_post() {
        let mut form = configured();
        form.validate_config().unwrap();
        assert_eq!(form.method(), Method::Post);

        let mut form = configured().with_method(Method::Get);
        form.validate_config().unwrap();
        assert_eq!(form.method(), Method::Get);
    }

    #[test]
    fn test_script_target_first_writer_wins() {
        let mut form = Form::new();
        assert!(form.set_script_target("index.php"));
        assert!(!form.set_script_target("other.php"));
        assert_eq!(form.script_target(), "index.php");
    }

    #[test]
    fn test_default_buttons() {
        let mut form = configured();
        form.validate_config().unwrap();
        assert_eq!(form.button_names().collect::<Vec<_>>(), vec!["edit", "reset"]);
        assert_eq!(form.button("edit").unwrap().kind(), ButtonKind::Submit);
        assert_eq!(form.button("reset").unwrap().kind(), ButtonKind::Reset);
    }

    #[test]
    fn test_explicit_button_suppresses_defaults() {
        let mut form = configured().with_button(Button::submit("save", "Save"));
        form.validate_config().unwrap();
        assert_eq!(form.button_count(), 1);
        assert!(form.button("edit").is_err());
    }

    #[test]
    fn test_validate_config_idempotent() {
        let mut form = configured();
        form.validate_config().unwrap();
        form.validate_config().unwrap();
        assert_eq!(form.button_count(), 2);

        form.set_title("Renamed");
        assert!(!form.is_config_valid());
        form.validate_config().unwrap();
        assert_eq!(form.button_count(), 2);
    }

    #[test]
    fn test_duplicate_field_overwrites_in_place() {
        let mut form = configured()
            .with_field(Field::string("a", "First A", ""))
            .with_field(Field::string("b", "B", ""));
        form.add_field(Field::string("a", "Second A", ""));

        assert_eq!(form.field_count(), 2);
        assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(form.field("a").unwrap().description(), "Second A");
    }

    #[test]
    fn test_fields_and_buttons_are_separate() {
        let form = configured()
            .with_field(Field::string("go", "Go", ""))
            .with_button(Button::submit("go", "Go"));
        assert_eq!(form.field_count(), 1);
        assert_eq!(form.button_count(), 1);
    }

    #[test]
    fn test_lookup_failures() {
        let mut form = configured();
        assert!(matches!(form.field("nope"), Err(EditorError::FieldNotFound(_))));
        assert!(matches!(form.field_mut("nope"), Err(EditorError::FieldNotFound(_))));
        assert!(matches!(form.button("nope"), Err(EditorError::ButtonNotFound(_))));
        assert!(matches!(form.button_mut("nope"), Err(EditorError::ButtonNotFound(_))));
    }

    #[test]
    fn test_submission_without_marker_is_ignored() {
        let mut form = configured().with_field(Field::string("test", "Test", ""));
        let handled = form
            .handle_submission(&Submission::new().with("test", "value"))
            .unwrap();
        assert!(!handled);
        assert_eq!(form.field("test").unwrap().value(), "");
    }

    #[test]
    fn test_custom_submit_button_is_the_marker() {
        let mut form = configured()
            .with_field(Field::string("test", "Test", ""))
            .with_button(Button::submit("save", "Save"));

        let ignored = Submission::new().with("edit", "OK").with("test", "x");
        assert!(!form.handle_submission(&ignored).unwrap());

        let saved = Submission::new().with("save", "Save").with("test", "x");
        assert!(form.handle_submission(&saved).unwrap());
        assert_eq!(form.field("test").unwrap().value(), "x");
    }

    #[test]
    fn test_bad_field_does_not_stop_others() {
        let mut form = configured()
            .with_field(StringField::new("a", "A", "").required().build())
            .with_field(Field::string("b", "B", ""));

        let submission = Submission::new()
            .with("edit", "OK")
            .with("a", "")
            .with("b", "kept");
        assert!(form.handle_submission(&submission).unwrap());

        assert!(form.field("a").unwrap().has_error());
        assert_eq!(form.field("b").unwrap().value(), "kept");
        assert!(form.has_errors());
        assert_eq!(form.errors().keys().copied().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_missing_values_keep_previous() {
        let mut form = configured().with_field(Field::string("a", "A", ""));
        let _ = form.field_mut("a").unwrap().set_value("before");

        let submission = Submission::new().with("edit", "OK");
        assert!(form.handle_submission(&submission).unwrap());
        assert_eq!(form.field("a").unwrap().value(), "before");
    }

    #[test]
    fn test_handle_submission_requires_config() {
        let mut form = Form::new().with_field(Field::string("a", "A", ""));
        let result = form.handle_submission(&Submission::new().with("edit", "OK").with("a", "x"));
        assert!(matches!(result, Err(EditorError::InvalidConfig(_))));
        assert_eq!(form.field("a").unwrap().value(), "");
        assert_eq!(form.button_count(), 0);
    }

    #[test]
    fn test_render_requires_config() {
        let mut form = Form::new().with_title("No target");
        assert!(matches!(form.render(), Err(EditorError::InvalidConfig(_))));
    }

    #[test]
    fn test_method_serde() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), r#""get""#);
        assert_eq!(serde_json::from_str::<Method>(r#""post""#).unwrap(), Method::Post);
        assert!(serde_json::from_str::<Method>(r#""put""#).is_err());
        assert_eq!(Method::Get.to_string(), "get");
    }
}
