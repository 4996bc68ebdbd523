//! Dispatch from document format to its handler

use std::sync::Arc;

use crate::domain::extraction::{DocumentFormat, FormatHandler};

use super::docx::DocxHandler;
use super::pdf::{PdfHandler, PdfResolver};
use super::plain_text::PlainTextHandler;

/// One handler per supported format
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    pdf: Arc<dyn FormatHandler>,
    docx: Arc<dyn FormatHandler>,
    plain_text: Arc<dyn FormatHandler>,
}

impl HandlerRegistry {
    /// Registry using the process-wide PDF resolver
    pub fn new() -> Self {
        Self::with_pdf_handler(Arc::new(PdfHandler::new()))
    }

    /// Registry whose PDF handler uses a specific resolver
    pub fn with_pdf_resolver(resolver: Arc<PdfResolver>) -> Self {
        Self::with_pdf_handler(Arc::new(PdfHandler::with_resolver(resolver)))
    }

    fn with_pdf_handler(pdf: Arc<dyn FormatHandler>) -> Self {
        Self {
            pdf,
            docx: Arc::new(DocxHandler::new()),
            plain_text: Arc::new(PlainTextHandler::new()),
        }
    }

    /// Replace the handler for one format
    pub fn with_handler(mut self, handler: Arc<dyn FormatHandler>) -> Self {
        match handler.format() {
            DocumentFormat::Pdf => self.pdf = handler,
            DocumentFormat::Docx => self.docx = handler,
            DocumentFormat::PlainText => self.plain_text = handler,
        }
        self
    }

    /// Handler responsible for `format`
    pub fn handler_for(&self, format: DocumentFormat) -> &Arc<dyn FormatHandler> {
        match format {
            DocumentFormat::Pdf => &self.pdf,
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::PlainText => &self.plain_text,
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
