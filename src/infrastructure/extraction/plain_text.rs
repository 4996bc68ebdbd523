//! Plain text format handler

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::extraction::{DocumentFormat, ExtractionError, FormatHandler, RawExtraction};

/// Handler for UTF-8 plain text files
#[derive(Debug, Clone, Default)]
pub struct PlainTextHandler;

impl PlainTextHandler {
    /// Create a new plain text handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FormatHandler for PlainTextHandler {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    async fn extract(&self, bytes: Bytes) -> Result<RawExtraction, ExtractionError> {
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            ExtractionError::failed(DocumentFormat::PlainText, format!("Invalid UTF-8: {}", e))
        })?;

        Ok(RawExtraction::new(text))
    }
}
