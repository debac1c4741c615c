#![allow(dead_code)]

use oxide_editor::{Field, Form, StringField, Submission};

/// The three-field test form: `test`, `test2` and the required `test3`.
pub fn test_form() -> Form {
    Form::new()
        .with_title("Test-Form")
        .with_script_target("index.php")
        .with_field(Field::string("test", "Test", "This is a test field"))
        .with_field(Field::string("test2", "Test2", "This is a test field, too"))
        .with_field(
            StringField::new("test3", "Test3", "This one is required")
                .required()
                .build(),
        )
}

/// A submission sent by the default submit button.
pub fn edit(pairs: &[(&str, &str)]) -> Submission {
    pairs
        .iter()
        .copied()
        .chain([("edit", "OK")])
        .collect()
}

pub fn render(form: &mut Form) -> String {
    form.render()
        .unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

/// Position of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("Expected {needle:?} in:\n{haystack}"))
}
