//! Request and response types for the HTTP API

pub mod error;
pub mod extract;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use extract::ExtractResponse;
