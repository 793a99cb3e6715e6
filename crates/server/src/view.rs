use std::sync::OnceLock;

use shared::domain::Message;
use tera::{Context, Tera};

/// Submission-form state carried into the rendered page.
#[derive(Debug, Clone)]
pub enum FormState {
    Empty,
    Invalid { error: String },
}

static TEMPLATES: OnceLock<Tera> = OnceLock::new();

fn templates() -> &'static Tera {
    TEMPLATES.get_or_init(|| {
        let mut tera = Tera::default();
        tera.add_raw_template("home.html", include_str!("../templates/home.html"))
            .expect("embedded home template parses");
        tera
    })
}

/// Pure function of (items, form state) to a complete HTML document.
pub fn render_home(items: &[Message], form: &FormState) -> Result<String, tera::Error> {
    let form_error = match form {
        FormState::Empty => None,
        FormState::Invalid { error } => Some(error.as_str()),
    };

    let mut context = Context::new();
    context.insert("items", items);
    context.insert("form_error", &form_error);
    templates().render("home.html", &context)
}
