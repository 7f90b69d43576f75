pub mod contract;
pub mod hash;
pub mod service;
pub mod validate;

pub use contract::{ErrorResponse, HashRequest, HashResponse};
pub use hash::{is_canonical_digest, sha256_hex, DIGEST_HEX_LEN};
pub use service::{hash, hash_form_input, hash_json, hash_text, HashError};
pub use validate::{is_json_content_type, ValidationError};
