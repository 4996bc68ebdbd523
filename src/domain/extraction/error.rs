//! Extraction error taxonomy

use thiserror::Error;

use super::format::DocumentFormat;

/// Errors returned by the extraction core
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The file extension is not one of the supported formats
    #[error("Unsupported document format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// No working calling convention was found for a required library
    #[error("Library unavailable: {library}")]
    LibraryUnavailable { library: String },

    /// A specific document could not be parsed
    #[error("Extraction failed for {format} document: {message}")]
    ExtractionFailed {
        format: DocumentFormat,
        message: String,
    },

    /// Extraction succeeded but produced no usable characters
    #[error("No text could be extracted from {format} document")]
    EmptyResult { format: DocumentFormat },
}

impl ExtractionError {
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    pub fn unavailable(library: impl Into<String>) -> Self {
        Self::LibraryUnavailable {
            library: library.into(),
        }
    }

    pub fn failed(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            format,
            message: message.into(),
        }
    }

    pub fn empty(format: DocumentFormat) -> Self {
        Self::EmptyResult { format }
    }

    /// Stable snake_case label for logs, metrics and API error codes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::LibraryUnavailable { .. } => "library_unavailable",
            Self::ExtractionFailed { .. } => "extraction_failed",
            Self::EmptyResult { .. } => "empty_result",
        }
    }

    /// Whether the failure points at a broken dependency rather than the document
    pub fn is_service_health_issue(&self) -> bool {
        matches!(self, Self::LibraryUnavailable { .. })
    }
}
