//! Document extraction domain types and traits
//!
//! This module provides:
//! - `DocumentFormat` detection from filenames
//! - `FormatHandler` trait implemented once per supported format
//! - `AdapterResolver` for dependencies with unstable calling conventions
//! - `normalize` applied to every extraction result

pub mod error;
pub mod format;
pub mod handler;
pub mod normalize;
pub mod resolver;

// Re-export main types
pub use error::ExtractionError;
pub use format::{detect_format, extension_of, sniff_format, DocumentFormat};
pub use handler::{ExtractionResult, FormatHandler, RawExtraction};
pub use normalize::normalize;
pub use resolver::{AdapterResolver, Probe, Resolution};

// Re-export mocks for testing
#[cfg(test)]
pub use handler::mock::MockFormatHandler;
