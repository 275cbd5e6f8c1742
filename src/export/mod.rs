//! Export functionality
//!
//! Provides exporters for rendering data contracts:
//! - DBML (diagram-definition text for entity-relationship rendering)
//!
//! Type resolution against a SQL dialect lives in [`sql_type`] and is shared
//! by exporters that emit physical types.

pub mod dbml;
pub mod sql_type;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Export error: {0}")]
    ExportError(String),
}

// Re-export for convenience
pub use dbml::{DbmlExporter, TypeMapping};
