//! PDF library surfaces
//!
//! The text-extraction entry points available for PDF depend on which backends
//! this build links. [`PdfLibrary`] reports each known entry-point shape as
//! present or absent without running any extraction; the resolver picks one.

use std::sync::Arc;

use crate::domain::extraction::ExtractionError;

/// Normalized PDF extraction callable
pub type PdfCallable = Arc<dyn Fn(&[u8]) -> Result<String, ExtractionError> + Send + Sync>;

/// Entry-point shapes a PDF backend may expose.
///
/// Every method only reports availability; none of them touch document data.
pub trait PdfLibrary: Send + Sync {
    /// A function taking the whole buffer and returning its text
    fn text_from_bytes(&self) -> Option<PdfCallable> {
        None
    }

    /// A wrapper around another surface whose callable must be unwrapped
    fn default_export(&self) -> Option<Arc<dyn PdfLibrary>> {
        None
    }

    /// A loader that is instantiated with the buffer and then asked for text
    fn document_loader(&self) -> Option<Arc<dyn PdfLoader>> {
        None
    }

    /// An implementation-path entry point outside the public surface
    fn internal_entry(&self) -> Option<PdfCallable> {
        None
    }
}

/// Loader half of the "instantiate, then get text" shape
pub trait PdfLoader: Send + Sync {
    fn load(&self, bytes: &[u8]) -> Result<Box<dyn LoadedPdf>, String>;
}

/// A parsed PDF able to produce its text
pub trait LoadedPdf {
    fn text(&self) -> Result<String, String>;
}

/// The PDF backends compiled into this binary.
///
/// `pdf-extract` provides the direct callable and `lopdf` provides the loader
/// shape. With neither feature enabled no shape is reported and PDF extraction
/// is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedPdfLibrary;

impl PdfLibrary for LinkedPdfLibrary {
    #[cfg(feature = "pdf-extract")]
    fn text_from_bytes(&self) -> Option<PdfCallable> {
        use crate::domain::extraction::DocumentFormat;

        let callable: PdfCallable = Arc::new(|bytes: &[u8]| {
            pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::failed(DocumentFormat::Pdf, e.to_string()))
        });

        Some(callable)
    }

    #[cfg(feature = "lopdf")]
    fn document_loader(&self) -> Option<Arc<dyn PdfLoader>> {
        Some(Arc::new(lopdf_backend::LopdfLoader))
    }
}

#[cfg(feature = "lopdf")]
mod lopdf_backend {
    use super::{LoadedPdf, PdfLoader};

    pub(super) struct LopdfLoader;

    impl PdfLoader for LopdfLoader {
        fn load(&self, bytes: &[u8]) -> Result<Box<dyn LoadedPdf>, String> {
            let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
            Ok(Box::new(LopdfDocument(document)))
        }
    }

    struct LopdfDocument(lopdf::Document);

    impl LoadedPdf for LopdfDocument {
        fn text(&self) -> Result<String, String> {
            let pages: Vec<u32> = self.0.get_pages().keys().copied().collect();

            if pages.is_empty() {
                return Ok(String::new());
            }

            self.0.extract_text(&pages).map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "pdf-extract")]
    #[test]
    fn test_linked_library_exposes_direct_callable() {
        assert!(LinkedPdfLibrary.text_from_bytes().is_some());
    }

    #[cfg(feature = "lopdf")]
    #[test]
    fn test_linked_library_exposes_loader() {
        assert!(LinkedPdfLibrary.document_loader().is_some());
    }

    #[test]
    fn test_linked_library_has_no_wrapper_or_internal_entry() {
        assert!(LinkedPdfLibrary.default_export().is_none());
        assert!(LinkedPdfLibrary.internal_entry().is_none());
    }

    #[cfg(feature = "lopdf")]
    #[test]
    fn test_loader_rejects_garbage() {
        let loader = LinkedPdfLibrary.document_loader().unwrap();
        assert!(loader.load(b"not a pdf").is_err());
    }
}
