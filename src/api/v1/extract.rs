//! Document upload endpoint

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorType, ExtractResponse};
use crate::domain::detect_format;

/// POST /v1/extract
///
/// Takes a multipart form and extracts text from the first part carrying a
/// filename. The filename's extension selects the format.
pub async fn extract_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        ApiError::bad_request(rejection.body_text()).with_code("invalid_multipart")
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let declared = field.content_type().map(str::to_string);
        if let Some(expected) = declared
            .as_deref()
            .and_then(|declared| mismatched_content_type(&filename, declared))
        {
            debug!(
                filename = %filename,
                declared = declared.as_deref().unwrap_or_default(),
                expected,
                "Upload content type differs from its extension"
            );
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        debug!(filename = %filename, bytes = bytes.len(), "Received upload");

        let result = state
            .extraction_service
            .extract_text(bytes, &filename)
            .await
            .map_err(ApiError::from)?;

        return Ok(Json(ExtractResponse::from_domain(result)));
    }

    Err(ApiError::bad_request("Request must include a file upload")
        .with_param("file")
        .with_code("missing_file"))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::new(err.status(), ApiErrorType::InvalidRequestError, err.body_text())
        .with_code("invalid_multipart")
}

/// MIME type the extension implies, when the client declared a different one.
/// Generic `application/octet-stream` declarations are not reported.
fn mismatched_content_type(filename: &str, declared: &str) -> Option<&'static str> {
    let expected = detect_format(filename)?.mime_type();
    let essence = declared.split(';').next().unwrap_or_default().trim();

    if essence.is_empty()
        || essence.eq_ignore_ascii_case("application/octet-stream")
        || essence.eq_ignore_ascii_case(expected)
    {
        return None;
    }

    Some(expected)
}
