//! Markup generation for fields, buttons and forms.
//!
//! Renderers only read state. Validation never depends on them, so an
//! alternate output format is a new [`Renderer`] implementation.

mod html;

pub use html::HtmlRenderer;

use crate::field::{Button, Field};
use crate::form::Form;

/// Turns editor state into markup.
pub trait Renderer {
    /// Renders the field's short description.
    fn render_label(&self, field: &Field) -> String;

    /// Renders the field's long description.
    fn render_help(&self, field: &Field) -> String;

    /// Renders the input used to edit the field.
    fn render_input(&self, field: &Field) -> String;

    /// Renders a button.
    fn render_button(&self, button: &Button) -> String;

    /// Renders a whole form: title, one block per field in insertion order,
    /// then the buttons.
    ///
    /// Callers go through [`Form::render_with`], which validates the
    /// configuration first.
    fn render_form(&self, form: &Form) -> String;
}

/// Renders bare strings with no markup.
///
/// Inputs have no textual form and render empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_label(&self, field: &Field) -> String {
        field.description().to_string()
    }

    fn render_help(&self, field: &Field) -> String {
        field.long_description().to_string()
    }

    fn render_input(&self, _field: &Field) -> String {
        String::new()
    }

    fn render_button(&self, button: &Button) -> String {
        format!("[{}]", button.value())
    }

    fn render_form(&self, form: &Form) -> String {
        let mut lines = vec![form.title().to_string()];

        for field in form.fields() {
            let marker = if field.required { "*" } else { "" };
            lines.push(format!(
                "{}{marker}: {}",
                self.render_label(field),
                self.render_help(field)
            ));
            lines.push(format!("  = {}", field.value()));
            if let Some(error) = field.error() {
                lines.push(format!("  ! {error}"));
            }
        }

        let buttons: Vec<_> = form.buttons().map(|b| self.render_button(b)).collect();
        lines.push(buttons.join(" "));
        lines.join("\n")
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
