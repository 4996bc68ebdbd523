//! Infrastructure layer - Handlers, logging and metrics

pub mod extraction;
pub mod logging;
pub mod observability;
