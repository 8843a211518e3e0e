/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Request handlers for the file API.
//!
//! Every endpoint operates on [`WireFile`] values held behind a
//! [`FileRepository`]. Failures come back as `(StatusCode,
//! Json<ErrorResponse>)` so clients always receive a structured body.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /files` - List files
//! - `POST /files/create` - Create a file from JSON or wire text
//! - `GET /files/{file_id}` - Get a file by id
//! - `DELETE /files/{file_id}` - Delete a file
//! - `GET /files/{file_id}/contents` - Render a file as wire text
//! - `GET /files/{file_id}/validate` - Validate a stored file
//! - `POST /files/{file_id}/messages` - Append a message to a file
//!
//! Creating a file does not validate it: a file is accepted as long as its
//! body decodes, and `validate` reports problems later. This keeps partially
//! assembled files usable through the append endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use ferrowire_codec::{Writer, read_file};
use ferrowire_core::StoreError;
use ferrowire_message::{FedwireMessage, WireFile};
use ferrowire_store::FileRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the file API.
#[derive(Clone)]
pub struct AppState {
    /// File repository backing every endpoint.
    pub repository: Arc<dyn FileRepository>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error response with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

// The orphan rule forbids `impl From<StoreError> for (StatusCode,
// Json<ErrorResponse>)` here: both the trait and the tuple are foreign, and
// `ErrorResponse` is covered by non-fundamental constructors.
fn store_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
    };

    (status, Json(ErrorResponse::new(code, err.to_string())))
}

/// Body for endpoints that acknowledge an operation without a payload.
///
/// Successful delete and validate calls answer `{"error": null}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Error text, `null` when the operation succeeded.
    pub error: Option<String>,
}

impl StatusResponse {
    /// Creates a success acknowledgement.
    #[must_use]
    pub fn ok() -> Self {
        Self { error: None }
    }
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List all stored files.
///
/// The total number of files is repeated in the `X-Total-Count` header.
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the repository query fails.
#[instrument(skip(state))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let files = state.repository.get_files().await.map_err(|err| {
        error!("failed to list files: {err}");
        internal_error(&err.to_string())
    })?;

    info!("listing {} files", files.len());

    let total = files.len().to_string();
    Ok(([("x-total-count", total)], Json(files)))
}

/// Create a file from a JSON document or raw wire text.
///
/// A request with an `application/json` content type is decoded as a
/// [`WireFile`]; any other body is handed to the wire-format reader. The
/// decoded file is saved as-is, without validation.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if the body does not decode.
/// Returns `INTERNAL_ERROR` if the repository save fails.
#[instrument(skip(state, headers, body))]
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<WireFile>), (StatusCode, Json<ErrorResponse>)> {
    let file = decode_file(&headers, &body)?;

    let saved = state.repository.save_file(file).await.map_err(|err| {
        error!("failed to save file: {err}");
        internal_error(&err.to_string())
    })?;

    info!("created file {}", saved.id);

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get a file by id.
///
/// # Errors
///
/// Returns `NOT_FOUND` if the file does not exist.
#[instrument(skip(state))]
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<WireFile>, (StatusCode, Json<ErrorResponse>)> {
    let file = fetch_file(&state, &file_id).await?;
    Ok(Json(file))
}

/// Delete a file by id.
///
/// Deleting an id that does not exist still succeeds.
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the repository delete fails.
#[instrument(skip(state))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.repository.delete_file(&file_id).await.map_err(|err| {
        error!("failed to delete file {file_id}: {err}");
        internal_error(&err.to_string())
    })?;

    info!("deleted file {file_id}");

    Ok(Json(StatusResponse::ok()))
}

/// Render a file as wire text.
///
/// # Errors
///
/// Returns `NOT_FOUND` if the file does not exist.
#[instrument(skip(state))]
pub async fn get_file_contents(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let file = fetch_file(&state, &file_id).await?;

    info!("rendering file {file_id} contents");

    let mut writer = Writer::new();
    writer.write_file(&file);
    Ok(writer.finish())
}

/// Validate a stored file without modifying it.
///
/// # Errors
///
/// Returns `NOT_FOUND` if the file does not exist.
/// Returns `VALIDATION_ERROR` naming the first failing record otherwise.
#[instrument(skip(state))]
pub async fn validate_file(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let file = fetch_file(&state, &file_id).await?;

    file.create().map_err(|err| {
        warn!("file {file_id} is invalid: {err}");
        validation_error(&err.to_string())
    })?;

    info!("validated file {file_id}");

    Ok(Json(StatusResponse::ok()))
}

/// Append a message to an existing file.
///
/// The message is appended and saved without validation, mirroring create.
///
/// # Errors
///
/// Returns `NOT_FOUND` if the file does not exist.
/// Returns `INTERNAL_ERROR` if the repository save fails.
#[instrument(skip(state, message))]
pub async fn add_message(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
    Json(message): Json<FedwireMessage>,
) -> Result<Json<WireFile>, (StatusCode, Json<ErrorResponse>)> {
    let mut file = fetch_file(&state, &file_id).await?;
    file.add_message(message);

    let saved = state.repository.save_file(file).await.map_err(|err| {
        error!("failed to save file {file_id}: {err}");
        internal_error(&err.to_string())
    })?;

    info!("appended message to file {file_id}");

    Ok(Json(saved))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn decode_file(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<WireFile, (StatusCode, Json<ErrorResponse>)> {
    if content_type_is_json(headers) {
        serde_json::from_slice(body)
            .map_err(|err| validation_error(&format!("invalid file JSON: {err}")))
    } else {
        let text = std::str::from_utf8(body)
            .map_err(|_| validation_error("file contents are not valid UTF-8"))?;
        read_file(text).map_err(|err| validation_error(&err.to_string()))
    }
}

fn content_type_is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

async fn fetch_file(
    state: &AppState,
    file_id: &str,
) -> Result<WireFile, (StatusCode, Json<ErrorResponse>)> {
    state.repository.get_file(file_id).await.map_err(|err| {
        warn!("failed to read file {file_id}: {err}");
        store_error(err)
    })
}

fn validation_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("VALIDATION_ERROR", message)),
    )
}

fn internal_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("INTERNAL_ERROR", message)),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const WIRE_TEXT: &str = concat!(
        "{1500}30        T \n",
        "{1510}1000\n",
        "{1520}20240101Source  000001\n",
        "{2000}000000001234\n",
        "{3100}121042882Wells Fargo NA    \n",
        "{3400}231380104Citadel           \n",
        "{3600}CTR   \n",
    );

    #[test]
    fn test_error_response_new() {
        let err = ErrorResponse::new("VALIDATION_ERROR", "something was off");
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.message, "something was off");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let details = serde_json::json!({"tag": "{2000}"});
        let err = ErrorResponse::with_details("VALIDATION_ERROR", "bad record", details.clone());
        assert_eq!(err.details, Some(details));
    }

    #[test]
    fn test_status_response_serializes_null_error() {
        let body = serde_json::to_string(&StatusResponse::ok()).unwrap();
        assert_eq!(body, r#"{"error":null}"#);
    }

    #[test]
    fn test_store_error_maps_to_not_found() {
        let err = StoreError::NotFound {
            id: "ce5part9".to_string(),
        };
        let (status, Json(body)): (StatusCode, Json<ErrorResponse>) = store_error(err);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.message, "file not found: ce5part9");
    }

    #[test]
    fn test_decode_file_json_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

        let file = decode_file(&headers, br#"{"id":"f1","messages":[]}"#).unwrap();
        assert_eq!(file.id, "f1");
        assert!(file.messages.is_empty());
    }

    #[test]
    fn test_decode_file_wire_text_without_content_type() {
        let headers = HeaderMap::new();

        let file = decode_file(&headers, WIRE_TEXT.as_bytes()).unwrap();
        assert_eq!(file.messages.len(), 1);
    }

    #[test]
    fn test_decode_file_rejects_unknown_tag() {
        let headers = HeaderMap::new();

        let (status, Json(body)) = decode_file(&headers, b"{9999}junk").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_decode_file_rejects_bad_json() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

        let (status, _) = decode_file(&headers, b"{not json").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_decode_file_rejects_invalid_utf8() {
        let headers = HeaderMap::new();

        let (status, Json(body)) = decode_file(&headers, &[0x7b, 0xff, 0xfe]).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.contains("UTF-8"));
    }
}
