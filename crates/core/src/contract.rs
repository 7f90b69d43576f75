use serde::{Deserialize, Serialize};

/// Body of `POST /api/hash`. Incoming bodies are built through
/// `HashRequest::from_value`, which enforces the field rules.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HashRequest {
    pub text: String,
}

impl HashRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Successful hash result. `hashed_value` is always canonical lowercase hex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashResponse {
    pub original_text: String,
    pub hashed_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
