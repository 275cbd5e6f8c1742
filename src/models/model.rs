//! Model and Field types - one table/entity within a contract and its fields.

use serde::{Deserialize, Serialize};

/// Field - one column/attribute within a model
///
/// A field carries a logical type from the contract type vocabulary
/// (`integer`, `string`, `timestamp`, ...), constraint flags, an optional
/// description, and an optional reference to another model's field in
/// `"<model>.<field>"` form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,
    /// Logical type from the contract type vocabulary
    #[serde(rename = "type")]
    pub logical_type: String,
    /// Whether a value is required (rendered as `not null` vs `null`)
    #[serde(default)]
    pub required: bool,
    /// Whether values are unique across rows
    #[serde(default)]
    pub unique: bool,
    /// Whether this field is (part of) the primary key
    #[serde(default)]
    pub primary: bool,
    /// Field description/documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to another model's field, `"<model>.<field>"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl Field {
    /// Create a new field with the given name and logical type
    pub fn new(name: impl Into<String>, logical_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logical_type: logical_type.into(),
            ..Default::default()
        }
    }

    /// Set the required flag
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the unique flag
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the primary-key flag
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the referenced field, `"<model>.<field>"`
    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }
}

/// Model - one table/entity within a contract
///
/// Fields keep their insertion order; exporters render them in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name (table name)
    pub name: String,
    /// Model description/documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields in this model, in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    /// Create a new model with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set all fields
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field = Field::new("customer_id", "integer")
            .with_required(true)
            .with_references("customers.id");

        assert_eq!(field.name, "customer_id");
        assert_eq!(field.logical_type, "integer");
        assert!(field.required);
        assert!(!field.unique);
        assert!(!field.primary);
        assert_eq!(field.references, Some("customers.id".to_string()));
    }

    #[test]
    fn test_field_flag_defaults_on_deserialization() {
        let field: Field = serde_json::from_str(r#"{"name": "id", "type": "integer"}"#).unwrap();

        assert!(!field.required);
        assert!(!field.unique);
        assert!(!field.primary);
        assert!(field.description.is_none());
        assert!(field.references.is_none());
    }

    #[test]
    fn test_field_logical_type_serializes_as_type() {
        let field = Field::new("id", "integer");
        let json = serde_json::to_string(&field).unwrap();

        assert!(json.contains("\"type\":\"integer\""));
        assert!(!json.contains("logical_type"));
    }

    #[test]
    fn test_model_preserves_field_order() {
        let model = Model::new("orders")
            .with_field(Field::new("id", "integer"))
            .with_field(Field::new("created_at", "timestamp"))
            .with_field(Field::new("total", "number"));

        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "created_at", "total"]);
        assert_eq!(model.field_count(), 3);
        assert!(model.get_field("total").is_some());
        assert!(model.get_field("missing").is_none());
    }
}
