use askama::Template;
use askama_web::WebTemplate;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, FromRequest, Multipart, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use text_hasher_core::validate::parse_body;
use text_hasher_core::{
    hash, hash_form_input, is_json_content_type, ErrorResponse, HashError, HashRequest,
    HashResponse, ValidationError,
};
use tracing::{debug, error, warn};

/// Router settings fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub max_body_bytes: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            max_body_bytes: crate::config::DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    original_text: Option<String>,
    hashed_value: Option<String>,
    error_message: Option<String>,
}

impl IndexTemplate {
    fn empty() -> Self {
        Self {
            original_text: None,
            hashed_value: None,
            error_message: None,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/hash", post(api_hash))
        .route("/api/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

/// JSON error body with the status the error class calls for.
struct ApiError(HashError);

impl From<HashError> for ApiError {
    fn from(err: HashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

async fn api_hash(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<HashResponse>, ApiError> {
    let result = hash_json_request(&headers, &body);
    match &result {
        Ok(resp) => debug!(text_len = resp.original_text.len(), "hashed api request"),
        Err(HashError::Internal) => error!("digest failed shape check"),
        Err(e) => warn!(error = %e, "rejected api request"),
    }
    Ok(Json(result?))
}

/// Parse first so an unparsable body always reports the parse error, whatever
/// content type was declared.
fn hash_json_request(headers: &HeaderMap, body: &[u8]) -> Result<HashResponse, HashError> {
    let value = parse_body(body)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !is_json_content_type(content_type) {
        return Err(ValidationError::UnsupportedContentType.into());
    }

    let request = HashRequest::from_value(value)?;
    hash(&request)
}

async fn index() -> IndexTemplate {
    IndexTemplate::empty()
}

#[derive(Debug, Deserialize)]
struct HashForm {
    #[serde(rename = "inputText", default)]
    input_text: String,
}

const FORM_FIELD: &str = "inputText";

/// Reads `inputText` from a urlencoded or multipart body. A missing field or
/// an unreadable body yields empty input.
async fn read_form_input(req: Request) -> String {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"));

    if !is_multipart {
        return match Form::<HashForm>::from_request(req, &()).await {
            Ok(Form(form)) => form.input_text,
            Err(e) => {
                debug!(error = %e, "unreadable form body, treating as empty");
                String::new()
            }
        };
    }

    let mut multipart = match Multipart::from_request(req, &()).await {
        Ok(multipart) => multipart,
        Err(e) => {
            debug!(error = %e, "unreadable multipart body, treating as empty");
            return String::new();
        }
    };
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FORM_FIELD) => {
                return field.text().await.unwrap_or_default();
            }
            Ok(Some(_)) => continue,
            Ok(None) => return String::new(),
            Err(e) => {
                debug!(error = %e, "malformed multipart body, treating as empty");
                return String::new();
            }
        }
    }
}

async fn submit_form(req: Request) -> (StatusCode, IndexTemplate) {
    let input_text = read_form_input(req).await;
    match hash_form_input(&input_text) {
        Ok(resp) => {
            debug!(text_len = resp.original_text.len(), "hashed form input");
            (
                StatusCode::OK,
                IndexTemplate {
                    original_text: Some(resp.original_text),
                    hashed_value: Some(resp.hashed_value),
                    error_message: None,
                },
            )
        }
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                error!("digest failed shape check");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                IndexTemplate {
                    original_text: Some(input_text),
                    hashed_value: None,
                    error_message: Some(e.to_string()),
                },
            )
        }
    }
}
