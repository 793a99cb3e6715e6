use serde::Deserialize;

/// Decoded submission form. The field is optional so a missing `message`
/// becomes a validation failure instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: Option<String>,
}

pub const REQUIRED_ERROR: &str = "This field is required.";

/// The `message` field must be present and non-blank; whitespace-only input
/// is rejected. Returns the text exactly as submitted.
pub fn validate_message(form: &MessageForm) -> Result<&str, &'static str> {
    form.message
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or(REQUIRED_ERROR)
}
