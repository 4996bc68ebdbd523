//! Document format detection

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Closed set of formats the extraction core understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// UTF-8 plain text
    PlainText,
}

impl DocumentFormat {
    /// All supported formats, in detection order
    pub const ALL: [DocumentFormat; 3] = [Self::Pdf, Self::Docx, Self::PlainText];

    /// Canonical file extension for this format (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "txt",
        }
    }

    /// MIME type associated with this format
    pub fn mime_type(&self) -> &'static str {
        mime_guess::from_ext(self.extension())
            .first_raw()
            .unwrap_or("application/octet-stream")
    }

    /// Stable label used in logs, metrics and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "plain_text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the lowercased extension of a filename or path.
///
/// Returns an empty string when the name has no extension.
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}

/// Detect the document format from a filename.
///
/// Only the extension is significant and it is compared case-insensitively.
pub fn detect_format(filename: &str) -> Option<DocumentFormat> {
    match extension_of(filename).as_str() {
        "pdf" => Some(DocumentFormat::Pdf),
        "docx" => Some(DocumentFormat::Docx),
        "txt" => Some(DocumentFormat::PlainText),
        _ => None,
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Guess the format from leading bytes.
///
/// Diagnostic only: the extension stays authoritative. Plain text has no
/// signature, so it is never reported here.
pub fn sniff_format(bytes: &[u8]) -> Option<DocumentFormat> {
    if bytes.starts_with(PDF_MAGIC) {
        return Some(DocumentFormat::Pdf);
    }

    if bytes.starts_with(ZIP_MAGIC) {
        return Some(DocumentFormat::Docx);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_known_extensions() {
        assert_eq!(detect_format("resume.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(detect_format("resume.docx"), Some(DocumentFormat::Docx));
        assert_eq!(detect_format("notes.txt"), Some(DocumentFormat::PlainText));
    }

    #[test]
    fn test_detect_format_is_case_insensitive() {
        assert_eq!(detect_format("resume.PDF"), detect_format("resume.pdf"));
        assert_eq!(detect_format("resume.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(detect_format("Cover.DocX"), Some(DocumentFormat::Docx));
        assert_eq!(detect_format("JOB.TXT"), Some(DocumentFormat::PlainText));
    }

    #[test]
    fn test_detect_format_unknown() {
        assert_eq!(detect_format("resume"), None);
        assert_eq!(detect_format("resume.rtf"), None);
        assert_eq!(detect_format("resume.doc"), None);
        assert_eq!(detect_format("resume.text"), None);
        assert_eq!(detect_format(""), None);
        assert_eq!(detect_format("."), None);
        assert_eq!(detect_format("pdf"), None);
        assert_eq!(detect_format(".pdf"), None);
        assert_eq!(detect_format("resume."), None);
    }

    #[test]
    fn test_detect_format_uses_last_extension() {
        assert_eq!(detect_format("resume.pdf.txt"), Some(DocumentFormat::PlainText));
        assert_eq!(detect_format("archive.docx.zip"), None);
        assert_eq!(detect_format("uploads/2024/resume.v2.pdf"), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("resume.RTF"), "rtf");
        assert_eq!(extension_of("resume"), "");
        assert_eq!(extension_of("dir.d/resume"), "");
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(DocumentFormat::Pdf.as_str(), "pdf");
        assert_eq!(DocumentFormat::PlainText.to_string(), "plain_text");
        assert_eq!(
            serde_json::to_string(&DocumentFormat::PlainText).unwrap(),
            "\"plain_text\""
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(DocumentFormat::Pdf.mime_type(), "application/pdf");
        assert_eq!(DocumentFormat::PlainText.mime_type(), "text/plain");
        assert_eq!(
            DocumentFormat::Docx.mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_sniff_format() {
        assert_eq!(sniff_format(b"%PDF-1.7\n..."), Some(DocumentFormat::Pdf));
        assert_eq!(sniff_format(b"PK\x03\x04rest"), Some(DocumentFormat::Docx));
        assert_eq!(sniff_format(b"plain words"), None);
        assert_eq!(sniff_format(b""), None);
    }
}
