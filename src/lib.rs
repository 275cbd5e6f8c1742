//! DBML diagram export for data contract models
//!
//! Converts a data contract (models, fields, types, constraints,
//! cross-references) into DBML text for rendering entity-relationship
//! diagrams:
//! - Contract model types (serde-capable, YAML and JSON)
//! - DBML export with dialect-aware type resolution
//! - Field-level references rendered as many-to-one relationships
//!
//! ```rust
//! use datacontract_dbml::export::DbmlExporter;
//! use datacontract_dbml::models::{DataContract, Field, Model, Server};
//!
//! let contract = DataContract::new("Orders", "1.0.0").with_model(
//!     Model::new("orders").with_fields(vec![
//!         Field::new("id", "integer").with_primary(true).with_required(true),
//!         Field::new("customer_id", "integer")
//!             .with_required(true)
//!             .with_references("customers.id"),
//!     ]),
//! );
//!
//! let dbml = DbmlExporter::new().export_diagram(&contract, Some(&Server::new("postgres")));
//! assert!(dbml.contains("Ref: orders.customer_id > customers.id"));
//! ```

pub mod export;
pub mod models;

// Re-export commonly used types
pub use export::{DbmlExporter, ExportError, ExportResult, TypeMapping};

// Re-export models
pub use models::{ContractInfo, DataContract, Field, Model, Server};
