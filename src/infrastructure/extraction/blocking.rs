//! Runs third-party decoders on the blocking pool

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use crate::domain::extraction::{DocumentFormat, ExtractionError};

/// Run a synchronous decoder off the async runtime.
///
/// A panic inside the decoder is contained and reported as
/// `ExtractionFailed` for that document.
pub(crate) async fn run_blocking<F>(
    format: DocumentFormat,
    decode: F,
) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || catch_unwind(AssertUnwindSafe(decode)))
        .await
        .map_err(|e| ExtractionError::failed(format, format!("Decoder task failed: {}", e)))?;

    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(format = %format, panic = %message, "Decoder panicked");

            Err(ExtractionError::failed(
                format,
                format!("Decoder panicked: {}", message),
            ))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_decoder_result() {
        let result = run_blocking(DocumentFormat::Pdf, || Ok("text".to_string())).await;
        assert_eq!(result.unwrap(), "text");
    }

    #[tokio::test]
    async fn test_passes_decoder_error_through() {
        let result = run_blocking(DocumentFormat::Docx, || {
            Err(ExtractionError::failed(DocumentFormat::Docx, "bad zip"))
        })
        .await;

        assert_eq!(
            result.unwrap_err(),
            ExtractionError::failed(DocumentFormat::Docx, "bad zip")
        );
    }

    #[tokio::test]
    async fn test_contains_panics() {
        let result = run_blocking(DocumentFormat::Pdf, || -> Result<String, ExtractionError> {
            panic!("font table out of bounds")
        })
        .await;

        match result {
            Err(ExtractionError::ExtractionFailed { format, message }) => {
                assert_eq!(format, DocumentFormat::Pdf);
                assert!(message.contains("font table out of bounds"));
            }
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
    }
}
