use serde::{Deserialize, Serialize};

use crate::domain::{DocumentFormat, ExtractionResult};

/// Body of a successful `POST /v1/extract`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
    pub format: DocumentFormat,
    pub source_byte_length: usize,
}

impl ExtractResponse {
    pub fn from_domain(result: ExtractionResult) -> Self {
        Self {
            text: result.text,
            format: result.format,
            source_byte_length: result.source_byte_length,
        }
    }
}
