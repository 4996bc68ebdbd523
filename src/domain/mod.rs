//! Domain layer - Core extraction types and contracts

pub mod extraction;

pub use extraction::{
    detect_format, normalize, AdapterResolver, DocumentFormat, ExtractionError, ExtractionResult,
    FormatHandler, Probe, RawExtraction, Resolution,
};
