//! Extraction orchestration
//!
//! Ties the detector, the per-format handlers and the normalizer together
//! into the single public `extract_text` operation.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::domain::extraction::{
    detect_format, extension_of, normalize, sniff_format, DocumentFormat, ExtractionError,
    ExtractionResult,
};
use crate::infrastructure::observability::{record_extraction, ExtractionOutcome};

use super::pdf::{shared_pdf_resolver, PdfResolver};
use super::registry::HandlerRegistry;

/// Turns uploaded document bytes into normalized text
#[derive(Debug, Clone)]
pub struct ExtractionService {
    handlers: HandlerRegistry,
    pdf_resolver: Arc<PdfResolver>,
}

impl ExtractionService {
    /// Service backed by the process-wide PDF resolver
    pub fn new() -> Self {
        Self::with_pdf_resolver(shared_pdf_resolver())
    }

    /// Service whose PDF handler resolves against `resolver`
    pub fn with_pdf_resolver(resolver: Arc<PdfResolver>) -> Self {
        Self {
            handlers: HandlerRegistry::with_pdf_resolver(resolver.clone()),
            pdf_resolver: resolver,
        }
    }

    pub fn from_parts(handlers: HandlerRegistry, pdf_resolver: Arc<PdfResolver>) -> Self {
        Self {
            handlers,
            pdf_resolver,
        }
    }

    /// Extract normalized text from a document.
    ///
    /// The format comes from the filename's extension alone. Unknown
    /// extensions fail with `UnsupportedFormat` before any handler runs, and
    /// documents whose normalized text is empty fail with `EmptyResult`.
    pub async fn extract_text(
        &self,
        bytes: impl Into<Bytes>,
        filename: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        let bytes = bytes.into();
        let source_byte_length = bytes.len();

        let Some(format) = detect_format(filename) else {
            let extension = extension_of(filename);
            info!(filename = %filename, extension = %extension, "Rejected unsupported document");
            return Err(ExtractionError::unsupported(extension));
        };

        match sniff_format(&bytes) {
            Some(sniffed) if sniffed != format => warn!(
                filename = %filename,
                format = %format,
                sniffed = %sniffed,
                "Document content does not match its extension"
            ),
            _ => {}
        }

        debug!(
            filename = %filename,
            format = %format,
            bytes = source_byte_length,
            "Extracting document"
        );

        let started = Instant::now();
        let result = self.extract_as(format, bytes).await;

        match &result {
            Ok(result) => {
                record_extraction(
                    format,
                    ExtractionOutcome::Success,
                    started.elapsed(),
                    source_byte_length,
                );
                info!(
                    filename = %filename,
                    format = %format,
                    bytes = source_byte_length,
                    chars = result.text.chars().count(),
                    "Document extracted"
                );
            }
            Err(error) => {
                record_extraction(
                    format,
                    ExtractionOutcome::Failure(error.kind()),
                    started.elapsed(),
                    source_byte_length,
                );

                if error.is_service_health_issue() {
                    warn!(filename = %filename, format = %format, error = %error, "Document extraction unavailable");
                } else {
                    info!(filename = %filename, format = %format, error = %error, "Document extraction failed");
                }
            }
        }

        result
    }

    async fn extract_as(
        &self,
        format: DocumentFormat,
        bytes: Bytes,
    ) -> Result<ExtractionResult, ExtractionError> {
        let source_byte_length = bytes.len();
        let raw = self.handlers.handler_for(format).extract(bytes).await?;
        let text = normalize(&raw.text);

        if text.is_empty() {
            return Err(ExtractionError::empty(format));
        }

        Ok(ExtractionResult {
            text,
            format,
            source_byte_length,
        })
    }

    /// Whether a working PDF entry point exists, resolving it on first call
    pub fn pdf_available(&self) -> bool {
        self.pdf_resolver.resolve().is_some()
    }

    /// Name of the probe that resolved the PDF entry point
    pub fn pdf_strategy(&self) -> Option<&'static str> {
        self.pdf_resolver.strategy()
    }
}

impl Default for ExtractionService {
    fn default() -> Self {
        Self::new()
    }
}
