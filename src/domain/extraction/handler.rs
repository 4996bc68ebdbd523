//! Format handler trait and extraction result types

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::error::ExtractionError;
use super::format::DocumentFormat;

/// Text produced by a handler before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExtraction {
    pub text: String,
}

impl RawExtraction {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Normalized output of a single extraction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized plain text
    pub text: String,
    /// Format the text was extracted from
    pub format: DocumentFormat,
    /// Size of the uploaded buffer in bytes
    pub source_byte_length: usize,
}

/// Capability shared by every format handler
#[async_trait]
pub trait FormatHandler: Send + Sync + Debug {
    /// Format this handler understands
    fn format(&self) -> DocumentFormat;

    /// Turn raw document bytes into unnormalized text
    async fn extract(&self, bytes: Bytes) -> Result<RawExtraction, ExtractionError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock format handler for testing
    #[derive(Debug)]
    pub struct MockFormatHandler {
        format: DocumentFormat,
        result: Mutex<Option<Result<RawExtraction, ExtractionError>>>,
        calls: AtomicUsize,
    }

    impl MockFormatHandler {
        pub fn new(format: DocumentFormat) -> Self {
            Self {
                format,
                result: Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_text(self, text: impl Into<String>) -> Self {
            *self.result.lock().unwrap() = Some(Ok(RawExtraction::new(text)));
            self
        }

        pub fn with_error(self, error: ExtractionError) -> Self {
            *self.result.lock().unwrap() = Some(Err(error));
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FormatHandler for MockFormatHandler {
        fn format(&self) -> DocumentFormat {
            self.format
        }

        async fn extract(&self, bytes: Bytes) -> Result<RawExtraction, ExtractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(result) = self.result.lock().unwrap().clone() {
                return result;
            }

            String::from_utf8(bytes.to_vec())
                .map(RawExtraction::new)
                .map_err(|e| ExtractionError::failed(self.format, e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_result_serialization() {
        let result = ExtractionResult {
            text: "Jane Doe".to_string(),
            format: DocumentFormat::PlainText,
            source_byte_length: 8,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "Jane Doe");
        assert_eq!(json["format"], "plain_text");
        assert_eq!(json["source_byte_length"], 8);
    }

    #[tokio::test]
    async fn test_mock_handler_counts_calls() {
        let handler = mock::MockFormatHandler::new(DocumentFormat::Pdf).with_text("from mock");

        let raw = handler.extract(Bytes::from_static(b"ignored")).await.unwrap();

        assert_eq!(raw.text, "from mock");
        assert_eq!(handler.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_handler_error() {
        let handler = mock::MockFormatHandler::new(DocumentFormat::Docx)
            .with_error(ExtractionError::failed(DocumentFormat::Docx, "corrupt"));

        let result = handler.extract(Bytes::new()).await;

        assert!(matches!(result, Err(ExtractionError::ExtractionFailed { .. })));
    }
}
