//! Format handlers and the extraction service

mod blocking;
mod docx;
pub mod pdf;
mod plain_text;
mod registry;
mod service;

pub use docx::DocxHandler;
pub use pdf::{
    pdf_probes, pdf_resolver, shared_pdf_resolver, LinkedPdfLibrary, PdfCallable, PdfHandler,
    PdfLibrary, PdfResolver,
};
pub use plain_text::PlainTextHandler;
pub use registry::HandlerRegistry;
pub use service::ExtractionService;
