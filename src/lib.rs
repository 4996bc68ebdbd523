//! doc-intake
//!
//! Turns uploaded PDF, DOCX and plain-text documents into normalized text.
//! The core is [`infrastructure::extraction::ExtractionService`]; the HTTP
//! API and CLI are thin layers over it.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DocumentFormat, ExtractionError, ExtractionResult};
pub use infrastructure::extraction::ExtractionService;

use std::sync::Arc;

use api::state::AppState;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    info!(
        max_upload_bytes = config.extraction.max_upload_bytes,
        "Initializing extraction service"
    );

    AppState::new(
        Arc::new(ExtractionService::new()),
        config.extraction.max_upload_bytes,
    )
}
