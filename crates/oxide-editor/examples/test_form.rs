//! Renders the three-field test form after applying a submission.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p oxide-editor --example test_form -- 'edit=OK&test=%3Cb%3Ex%3C%2Fb%3E&test3='
//! ```
//!
//! The argument is a URL-encoded body as a browser would post it. Without
//! one, the form is rendered untouched.

use oxide_editor::{Field, Form, StringField, Submission};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn build_form() -> Form {
    let mut form = Form::new();
    form.set_script_target("index.php");
    form.set_title("Test-Form");

    form.add_field(Field::string("test", "Test", "This is a test field"));
    form.add_field(
        StringField::new("test2", "Test2", "This is a test field, too")
            .decode_html()
            .build(),
    );
    form.add_field(
        StringField::new("test3", "Test3", "This one is required")
            .required()
            .max_length(20)
            .build(),
    );
    form
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let body = std::env::args().nth(1).unwrap_or_default();
    let submission = Submission::from_urlencoded(&body)?;

    let mut form = build_form();
    if form.handle_submission(&submission)? {
        info!(errors = form.errors().len(), "submission handled");
    } else {
        info!("nothing submitted");
    }

    println!("{}", form.render()?);
    Ok(())
}
