//! DBML exporter for rendering data contracts as entity-relationship diagrams.
//!
//! Emits a header comment/note carrying provenance, a project declaration,
//! one table block per model, and a `Ref:` line per field-level reference.
//! Field types are emitted as logical types, or resolved against a server's
//! SQL dialect when one is given.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::export::sql_type::convert_to_sql_type;
use crate::export::{ExportError, ExportResult};
use crate::models::{DataContract, Field, Model, Server};

/// How field types are rendered: logical types verbatim, or resolved
/// against a named SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMapping<'a> {
    /// No physical dialect; logical types pass through unchanged.
    Logical,
    /// Resolve each logical type against the named dialect.
    Dialect(&'a str),
}

impl<'a> TypeMapping<'a> {
    /// Derive the mapping from an optional server descriptor.
    pub fn from_server(server: Option<&'a Server>) -> Self {
        match server {
            Some(server) => TypeMapping::Dialect(&server.server_type),
            None => TypeMapping::Logical,
        }
    }

    /// Resolve the emitted type string for a field.
    pub fn resolve(&self, field: &Field) -> String {
        match self {
            TypeMapping::Logical => field.logical_type.clone(),
            TypeMapping::Dialect(dialect) => convert_to_sql_type(field, dialect),
        }
    }

    /// Dialect name as rendered in the generated header.
    fn dialect_label(&self) -> &str {
        match self {
            TypeMapping::Logical => "Logical Datacontract",
            TypeMapping::Dialect(dialect) => dialect,
        }
    }
}

/// Exporter for DBML diagram format.
///
/// The generated header embeds a timestamp and the tool version; both
/// default to the current UTC time and this crate's package version, and
/// both can be pinned for reproducible output.
///
/// # Example
///
/// ```rust
/// use datacontract_dbml::export::DbmlExporter;
/// use datacontract_dbml::models::{DataContract, Field, Model};
///
/// let contract = DataContract::new("Orders", "1.0.0").with_model(
///     Model::new("orders").with_field(
///         Field::new("id", "integer").with_primary(true).with_required(true),
///     ),
/// );
///
/// let exporter = DbmlExporter::new();
/// let result = exporter.export(&contract, None).unwrap();
/// assert_eq!(result.format, "dbml");
/// assert!(result.content.contains("\"id\" \"integer\" [pk,not null]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DbmlExporter {
    generated_at: Option<DateTime<Utc>>,
    tool_version: Option<String>,
}

impl DbmlExporter {
    /// Create an exporter with default provenance (current time, crate version)
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the generation timestamp rendered in the header
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Pin the tool version rendered in the header
    pub fn with_tool_version(mut self, tool_version: impl Into<String>) -> Self {
        self.tool_version = Some(tool_version.into());
        self
    }

    /// Render the contract as a DBML diagram (SDK interface).
    ///
    /// Field types are resolved against the server's dialect when a server
    /// is given, and emitted as logical types otherwise.
    pub fn export(
        &self,
        contract: &DataContract,
        server: Option<&Server>,
    ) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: self.export_diagram(contract, server),
            format: "dbml".to_string(),
        })
    }

    /// Render the contract as DBML text.
    pub fn export_diagram(&self, contract: &DataContract, server: Option<&Server>) -> String {
        let mapping = TypeMapping::from_server(server);

        let mut out = String::new();
        out.push_str(&self.generated_info(contract, &mapping));
        out.push('\n');
        out.push_str(&project_info(contract));

        for model in &contract.models {
            debug!("Rendering table block for model '{}'", model.name);
            out.push('\n');
            out.push_str(&table_block(model, &mapping));
        }

        out
    }

    /// Provenance header: a comment and a `project_info` note with the same text.
    ///
    /// DBML distinguishes code comments from rendered annotations; the text is
    /// emitted as both so it survives in the source and in the diagram.
    fn generated_info(&self, contract: &DataContract, mapping: &TypeMapping) -> String {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let info = format!(
            "Generated at {} by datacontract-dbml version {}\n\
             for data contract {} ({}) version {}\n\
             Using {} types for the field types",
            generated_at.format("%b %d %Y"),
            self.tool_version(),
            contract.info.title,
            contract.id,
            contract.info.version,
            mapping.dialect_label(),
        );

        format!("/*\n{info}\n*/\n\nNote project_info {{\n'''\n{info}\n'''\n}}\n")
    }

    fn tool_version(&self) -> &str {
        // package metadata may be absent in exotic builds; the header then
        // carries an empty version
        self.tool_version
            .as_deref()
            .unwrap_or(option_env!("CARGO_PKG_VERSION").unwrap_or(""))
    }
}

/// Project declaration with the contract title and flattened description.
fn project_info(contract: &DataContract) -> String {
    format!(
        "Project \"{}\" {{\nNote: \"{}\"\n}}\n",
        contract.info.title,
        single_line(contract.info.description.as_deref().unwrap_or_default()),
    )
}

/// One table block plus any `Ref:` lines recorded from its fields.
fn table_block(model: &Model, mapping: &TypeMapping) -> String {
    let mut out = format!(
        "Table \"{}\" {{\nNote: \"{}\"\n",
        model.name,
        single_line(model.description.as_deref().unwrap_or_default()),
    );

    let mut references = Vec::new();
    for field in &model.fields {
        let (reference, line) = field_line(field, &model.name, mapping);
        if let Some(reference) = reference {
            references.push(reference);
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("}\n");

    if !references.is_empty() {
        for reference in &references {
            out.push_str(&format!("Ref: {reference}\n"));
        }
        out.push('\n');
    }

    out
}

/// Render one field line and, if the field references another model's field,
/// the pending relationship for it.
///
/// Attribute order is fixed: pk, unique, null-state, note. References are
/// always rendered many-to-one; the contract model carries no cardinality.
fn field_line(field: &Field, model_name: &str, mapping: &TypeMapping) -> (Option<String>, String) {
    let mut attrs = Vec::new();
    if field.primary {
        attrs.push("pk".to_string());
    }
    if field.unique {
        attrs.push("unique".to_string());
    }
    let null_state = if field.required { "not null" } else { "null" };
    attrs.push(null_state.to_string());
    if let Some(description) = field.description.as_deref().filter(|d| !d.is_empty()) {
        attrs.push(format!("Note: \"{}\"", single_line(description)));
    }

    let line = format!(
        "\"{}\" \"{}\" [{}]",
        field.name,
        mapping.resolve(field),
        attrs.join(","),
    );
    let reference = field
        .references
        .as_ref()
        .map(|target| format!("{}.{} > {}", model_name, field.name, target));

    (reference, line)
}

/// Collapse a multi-line text to a single line, joining lines with spaces.
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
