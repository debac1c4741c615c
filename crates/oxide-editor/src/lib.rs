//! # oxide-editor
//!
//! Form definition, validation and re-rendering.
//!
//! This crate provides:
//! - Fields that validate and store submitted values
//! - Buttons (submit, reset, hidden, plain)
//! - A form container handling the submit → validate → render cycle
//! - Pluggable renderers (HTML and plain text)
//! - Declarative form configuration loaded from JSON
//!
//! A rejected value never fails the submission. It stays on its field,
//! is echoed back into the input so the user can correct it, and the field
//! is flagged when the form is rendered again.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_editor::{Field, Form, StringField, Submission};
//!
//! let mut form = Form::new()
//!     .with_title("Test-Form")
//!     .with_script_target("index.php")
//!     .with_field(Field::string("test", "Test", "A test field"))
//!     .with_field(
//!         StringField::new("name", "Name", "Your name")
//!             .required()
//!             .build(),
//!     );
//!
//! // The default submit button is named `edit`.
//! let submission = Submission::from_urlencoded("edit=OK&test=hello&name=").unwrap();
//! assert!(form.handle_submission(&submission).unwrap());
//!
//! assert_eq!(form.field("test").unwrap().value(), "hello");
//! assert!(form.field("name").unwrap().has_error());
//!
//! let html = form.render().unwrap();
//! assert!(html.contains("has-error"));
//! ```
//!
//! ## Custom field kinds
//!
//! ```rust
//! use std::any::Any;
//! use oxide_editor::{FieldKind, FieldRegistry};
//!
//! #[derive(Debug)]
//! struct Digits;
//!
//! impl FieldKind for Digits {
//!     fn tag(&self) -> &str {
//!         "digits"
//!     }
//!
//!     fn validate(&self, candidate: &str, _required: bool) -> Result<(), Option<String>> {
//!         if candidate.chars().all(|c| c.is_ascii_digit()) {
//!             Ok(())
//!         } else {
//!             Err(Some("Digits only.".to_string()))
//!         }
//!     }
//!
//!     fn input_type(&self) -> Option<&str> {
//!         Some("text")
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//!
//! let mut registry = FieldRegistry::new();
//! registry.register("digits", || Digits);
//!
//! let mut age = registry.create("digits", "age", "Age", "").unwrap();
//! assert!(age.set_value("forty").is_rejected());
//! ```

mod config;
mod error;
pub mod field;
mod form;
mod id;
mod outcome;
pub mod render;
mod submission;
pub mod validation;

pub use config::{ButtonConfig, FieldConfig, FormConfig};
pub use error::{EditorError, Result};
pub use field::{Button, ButtonKind, Field, FieldKind, FieldRegistry, StringField, TextKind};
pub use form::{Form, Method};
pub use id::FieldId;
pub use outcome::{FieldError, ValidationOutcome};
pub use render::{HtmlRenderer, PlainRenderer, Renderer};
pub use submission::Submission;
