//! PDF format handler
//!
//! PDF text extraction goes through a process-wide [`PdfResolver`] that probes
//! the linked backends once and memoizes a single normalized callable:
//!
//! 1. `direct_callable` - a function taking the buffer and returning text
//! 2. `wrapped_default` - a wrapper whose nested callable is unwrapped
//! 3. `document_loader` - load the buffer, then ask the document for its text
//! 4. `internal_entry` - an implementation-path entry point
//!
//! If no probe matches, every PDF request fails with `LibraryUnavailable`
//! until the process restarts.

mod library;

pub use library::{LinkedPdfLibrary, LoadedPdf, PdfCallable, PdfLibrary, PdfLoader};

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::domain::extraction::{
    AdapterResolver, DocumentFormat, ExtractionError, FormatHandler, Probe, RawExtraction,
};

use super::blocking::run_blocking;

/// Library name reported in `LibraryUnavailable` errors and logs
pub const PDF_LIBRARY: &str = "pdf";

/// Resolver fronting the PDF backends
pub type PdfResolver = AdapterResolver<dyn PdfLibrary, PdfCallable>;

static SHARED_PDF_RESOLVER: Lazy<Arc<PdfResolver>> =
    Lazy::new(|| Arc::new(pdf_resolver(Arc::new(LinkedPdfLibrary))));

/// The process-wide resolver for the linked PDF backends
pub fn shared_pdf_resolver() -> Arc<PdfResolver> {
    SHARED_PDF_RESOLVER.clone()
}

/// Build a resolver over an arbitrary PDF library surface
pub fn pdf_resolver(library: Arc<dyn PdfLibrary>) -> PdfResolver {
    AdapterResolver::new(PDF_LIBRARY, library, pdf_probes())
}

/// Probe chain in priority order
pub fn pdf_probes() -> Vec<Probe<dyn PdfLibrary, PdfCallable>> {
    vec![
        Probe::new("direct_callable", probe_direct_callable),
        Probe::new("wrapped_default", probe_wrapped_default),
        Probe::new("document_loader", probe_document_loader),
        Probe::new("internal_entry", probe_internal_entry),
    ]
}

fn probe_direct_callable(library: &dyn PdfLibrary) -> Option<PdfCallable> {
    library.text_from_bytes()
}

fn probe_wrapped_default(library: &dyn PdfLibrary) -> Option<PdfCallable> {
    library
        .default_export()
        .and_then(|inner| inner.text_from_bytes())
}

fn probe_document_loader(library: &dyn PdfLibrary) -> Option<PdfCallable> {
    let loader = library.document_loader()?;

    let callable: PdfCallable = Arc::new(move |bytes: &[u8]| {
        let document = loader
            .load(bytes)
            .map_err(|e| ExtractionError::failed(DocumentFormat::Pdf, e))?;

        document
            .text()
            .map_err(|e| ExtractionError::failed(DocumentFormat::Pdf, e))
    });

    Some(callable)
}

fn probe_internal_entry(library: &dyn PdfLibrary) -> Option<PdfCallable> {
    library.internal_entry()
}

/// Handler for PDF documents
#[derive(Debug, Clone)]
pub struct PdfHandler {
    resolver: Arc<PdfResolver>,
}

impl PdfHandler {
    /// Create a handler backed by the process-wide resolver
    pub fn new() -> Self {
        Self::with_resolver(shared_pdf_resolver())
    }

    /// Create a handler backed by a specific resolver
    pub fn with_resolver(resolver: Arc<PdfResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<PdfResolver> {
        &self.resolver
    }
}

impl Default for PdfHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormatHandler for PdfHandler {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    async fn extract(&self, bytes: Bytes) -> Result<RawExtraction, ExtractionError> {
        let adapter = self
            .resolver
            .resolve()
            .ok_or_else(|| ExtractionError::unavailable(self.resolver.library()))?;

        if bytes.is_empty() {
            return Err(ExtractionError::failed(
                DocumentFormat::Pdf,
                "Empty document buffer",
            ));
        }

        debug!(
            strategy = self.resolver.strategy().unwrap_or_default(),
            bytes = bytes.len(),
            "Extracting PDF text"
        );

        let text = run_blocking(DocumentFormat::Pdf, move || adapter(bytes.as_ref())).await?;

        Ok(RawExtraction::new(text))
    }
}
