//! JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::ExtractionError;

/// Error categories reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    UnsupportedDocumentError,
    UnprocessableDocumentError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::UnsupportedDocumentError => write!(f, "unsupported_document_error"),
            Self::UnprocessableDocumentError => write!(f, "unprocessable_document_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Service unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        let code = err.kind();

        let api_error = match &err {
            ExtractionError::UnsupportedFormat { .. } => Self::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiErrorType::UnsupportedDocumentError,
                format!(
                    "{}. Upload a .pdf, .docx or .txt file, or paste the text instead.",
                    err
                ),
            )
            .with_param("file"),
            ExtractionError::EmptyResult { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorType::UnprocessableDocumentError,
                format!(
                    "{}. The document may be scanned or image-only; paste the text instead.",
                    err
                ),
            ),
            ExtractionError::ExtractionFailed { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorType::UnprocessableDocumentError,
                err.to_string(),
            ),
            ExtractionError::LibraryUnavailable { .. } => {
                error!(error = %err, "Extraction backend unavailable");
                Self::unavailable("Document extraction is temporarily unavailable")
            }
        };

        api_error.with_code(code)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentFormat;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Missing file field");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Missing file field");
    }

    #[test]
    fn test_unsupported_format_is_415() {
        let err = ApiError::from(ExtractionError::unsupported("rtf"));

        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.response.error.code.as_deref(), Some("unsupported_format"));
        assert_eq!(err.response.error.param.as_deref(), Some("file"));
        assert!(err.response.error.message.contains("'rtf'"));
        assert!(err.response.error.message.contains("paste the text"));
    }

    #[test]
    fn test_empty_result_is_422_with_guidance() {
        let err = ApiError::from(ExtractionError::empty(DocumentFormat::Pdf));

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.response.error.code.as_deref(), Some("empty_result"));
        assert!(err.response.error.message.contains("paste the text"));
    }

    #[test]
    fn test_extraction_failed_is_422() {
        let err = ApiError::from(ExtractionError::failed(DocumentFormat::Docx, "bad zip"));

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.response.error.code.as_deref(), Some("extraction_failed"));
        assert!(err.response.error.message.contains("bad zip"));
    }

    #[test]
    fn test_library_unavailable_hides_detail() {
        let err = ApiError::from(ExtractionError::unavailable("pdf"));

        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.response.error.error_type,
            ApiErrorType::ServiceUnavailableError
        );
        assert_eq!(err.response.error.code.as_deref(), Some("library_unavailable"));
        assert!(!err.response.error.message.contains("pdf"));
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ApiError::bad_request("Missing file field").with_code("missing_file");

        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"invalid_request_error\""));
        assert!(json.contains("\"code\":\"missing_file\""));
        assert!(!json.contains("param"));
    }
}
