//! HTML output.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Span, H2};

use super::Renderer;
use crate::field::{Button, Field};
use crate::form::Form;

/// Renders forms as HTML.
///
/// Input values are written into the `value` attribute exactly as stored,
/// so what the user typed comes back verbatim on re-display.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Class put on every input.
    pub input_class: String,
    /// Inline style of the description block of a field holding an error.
    pub error_style: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            input_class: "input".to_string(),
            error_style: "color:#FF0000".to_string(),
        }
    }
}

impl HtmlRenderer {
    /// Creates a renderer with the default classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input class.
    #[must_use]
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = class.into();
        self
    }

    fn input_tag(&self, name: &str, input_type: &str, value: &str, id: &str) -> String {
        format!(
            r#"<input name="{name}" type="{input_type}" value="{value}" class="{}" id="{id}">"#,
            self.input_class
        )
    }

    /// Renders the description block and the input block of one field.
    pub fn render_field(&self, field: &Field) -> String {
        let has_error = field.has_error();
        let message = field
            .error()
            .and_then(|e| e.message())
            .map(str::to_owned);

        let class = if has_error {
            "field-description has-error"
        } else {
            "field-description"
        };
        let marker = if field.required { "*" } else { "" };

        let mut description = html! { div.class(#class) };
        if has_error {
            description = description.attr("style", &self.error_style);
        }
        description = description
            .raw(self.render_label(field))
            .raw(marker)
            .raw(self.render_help(field));
        if let Some(message) = message {
            description =
                description.child::<Div, _>(|m| m.class("field-error").text(&message));
        }

        let input_html = self.render_input(field);

        html! { div.class("field") }
            .raw(description.render())
            .child::<Div, _>(|d| d.class("field-input").raw(&input_html))
            .render()
    }
}

impl Renderer for HtmlRenderer {
    fn render_label(&self, field: &Field) -> String {
        let id = field.id().to_string();
        let description = field.description().to_string();
        html! {
            label.for_(#id) {
                strong { #description }
            }
        }
        .render()
    }

    fn render_help(&self, field: &Field) -> String {
        Element::<Span>::new()
            .class("help")
            .text(field.long_description())
            .render()
    }

    fn render_input(&self, field: &Field) -> String {
        match field.kind().input_type() {
            Some(input_type) => self.input_tag(
                field.name(),
                input_type,
                field.value(),
                &field.id().to_string(),
            ),
            None => String::new(),
        }
    }

    fn render_button(&self, button: &Button) -> String {
        self.input_tag(
            button.name(),
            button.kind().as_str(),
            button.value(),
            &button.id().to_string(),
        )
    }

    fn render_form(&self, form: &Form) -> String {
        let action = form.script_target();
        let method = form.method().as_str();
        let title = form.title();

        let mut el = html! {
            form.action(#action).method(#method)
        };

        el = el.child::<Div, _>(|d| d.class("form-title").child::<H2, _>(|h| h.text(title)));

        for field in form.fields() {
            let field_html = self.render_field(field);
            el = el.child::<Div, _>(|d| d.raw(&field_html));
        }

        let buttons_html = form
            .buttons()
            .map(|b| self.render_button(b))
            .collect::<Vec<_>>()
            .join(" ");
        el = el.child::<Div, _>(|d| d.class("buttons").raw(&buttons_html));

        el.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ButtonKind, StringField};
    use crate::outcome::FieldError;

    #[test]
    fn test_label_points_at_input() {
        let field = Field::string("email", "Email", "We will never share your email");
        let renderer = HtmlRenderer::new();
        let id = field.id().to_string();

        let label = renderer.render_label(&field);
        assert!(label.contains(&format!(r#"for="{id}""#)));
        assert!(label.contains("<strong>Email</strong>"));
        assert!(label.starts_with("<label") && label.ends_with("</label>"));

        let input = renderer.render_input(&field);
        assert!(input.contains(&format!(r#"id="{id}""#)));
        assert!(input.contains(r#"type="text""#));
        assert!(input.contains(r#"name="email""#));
        assert!(input.contains(r#"class="input""#));
    }

    #[test]
    fn test_help_text() {
        let field = Field::string("email", "Email", "We will never share your email");
        let help = HtmlRenderer::new().render_help(&field);
        assert!(help.contains("help"));
        assert!(help.contains("We will never share your email"));
    }

    #[test]
    fn test_input_value_is_literal() {
        let mut field = StringField::new("bio", "Bio", "").decode_html().build();
        assert!(field.set_value("<b>x</b>").is_accepted());
        let input = HtmlRenderer::new().render_input(&field);
        assert!(input.contains(r#"value="<b>x</b>""#));
    }

    #[test]
    fn test_field_without_error() {
        let field = StringField::new("name", "Name", "").required().build();
        let html = HtmlRenderer::new().render_field(&field);
        assert!(html.contains("Name"));
        assert!(html.contains('*'));
        assert!(!html.contains("has-error"));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_field_with_error_message() {
        let mut field = StringField::new("name", "Name", "").required().build();
        assert!(field.set_value("").is_rejected());
        let html = HtmlRenderer::new().render_field(&field);
        assert!(html.contains("has-error"));
        assert!(html.contains("color:#FF0000"));
        assert!(html.contains("This field is required."));
    }

    #[test]
    fn test_field_with_error_without_message() {
        let mut field = Field::string("name", "Name", "");
        field.set_error(FieldError::new("bad"));
        let html = HtmlRenderer::new().render_field(&field);
        assert!(html.contains("has-error"));
        assert!(!html.contains("field-error"));
        assert!(html.contains(r#"value="bad""#));
    }

    #[test]
    fn test_button_types() {
        let renderer = HtmlRenderer::new().input_class("btn");
        for (kind, expected) in [
            (ButtonKind::Button, r#"type="button""#),
            (ButtonKind::Submit, r#"type="submit""#),
            (ButtonKind::Reset, r#"type="reset""#),
            (ButtonKind::Hidden, r#"type="hidden""#),
        ] {
            let html = renderer.render_button(&Button::new("b", "Press", kind));
            assert!(html.contains(expected), "{html}");
            assert!(html.contains(r#"value="Press""#));
            assert!(html.contains(r#"class="btn""#));
        }
    }
}
