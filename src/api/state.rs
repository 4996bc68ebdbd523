//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::extraction::ExtractionService;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(extraction_service: Arc<ExtractionService>, max_upload_bytes: usize) -> Self {
        Self {
            extraction_service,
            max_upload_bytes,
        }
    }
}
