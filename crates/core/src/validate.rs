use serde_json::Value;
use thiserror::Error;

use crate::contract::HashRequest;

/// Client-caused conditions that stop a request before hashing.
///
/// The `Display` text of each variant is the exact message sent back to the
/// caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing JSON data in request body")]
    InvalidJson,
    #[error("Request content type must be application/json")]
    UnsupportedContentType,
    #[error("Missing 'text' field in JSON data")]
    MissingText,
    #[error("'text' field must be a string")]
    TextNotString,
    #[error("'text' field cannot be empty or consist only of whitespace")]
    BlankText,
    #[error("Input text cannot be empty.")]
    EmptyFormInput,
}

/// Parses a raw request body. An empty body is a parse failure.
pub fn parse_body(body: &[u8]) -> Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)
}

/// Accepts `application/json` and `application/*+json`, with or without
/// parameters.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.split_once('/') {
        Some(("application", "json")) => true,
        Some(("application", subtype)) => subtype.ends_with("+json"),
        _ => false,
    }
}

impl HashRequest {
    /// Field checks on an already-parsed body, in order: presence, type,
    /// non-blank. `null` and non-object bodies count as a missing field.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let text = match value {
            Value::Object(mut map) => map.remove("text"),
            _ => None,
        };
        match text {
            None | Some(Value::Null) => Err(ValidationError::MissingText),
            Some(Value::String(text)) => {
                validate_text(&text)?;
                Ok(Self { text })
            }
            Some(_) => Err(ValidationError::TextNotString),
        }
    }
}

pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankText);
    }
    Ok(())
}

/// Form submissions are always textual, so only emptiness is checked.
pub fn validate_form_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyFormInput);
    }
    Ok(())
}
