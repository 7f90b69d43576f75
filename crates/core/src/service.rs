use thiserror::Error;

use crate::contract::{ErrorResponse, HashRequest, HashResponse};
use crate::hash::{is_canonical_digest, sha256_hex};
use crate::validate::{parse_body, validate_form_text, validate_text, ValidationError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Fallback when the digest fails its own shape check. Not expected to
    /// happen with a working SHA-256 implementation.
    #[error("Internal server error: Could not calculate hash")]
    Internal,
}

impl HashError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, HashError::Validation(_))
    }
}

impl From<&HashError> for ErrorResponse {
    fn from(err: &HashError) -> Self {
        ErrorResponse::new(err.to_string())
    }
}

/// Validates `request.text` then hashes it. Blank text never reaches the
/// digest.
pub fn hash(request: &HashRequest) -> Result<HashResponse, HashError> {
    validate_text(&request.text)?;
    digest(&request.text)
}

fn digest(text: &str) -> Result<HashResponse, HashError> {
    let hashed_value = sha256_hex(text);
    if !is_canonical_digest(&hashed_value) {
        return Err(HashError::Internal);
    }
    Ok(HashResponse {
        original_text: text.to_owned(),
        hashed_value,
    })
}

/// Validates then hashes free text.
pub fn hash_text(text: &str) -> Result<HashResponse, HashError> {
    hash(&HashRequest::new(text))
}

/// Full JSON pipeline for callers that have no content type to check.
pub fn hash_json(body: &[u8]) -> Result<HashResponse, HashError> {
    let request = HashRequest::from_value(parse_body(body)?)?;
    hash(&request)
}

pub fn hash_form_input(input: &str) -> Result<HashResponse, HashError> {
    validate_form_text(input)?;
    digest(input)
}
