//! DataContract type - the root description of a dataset's structure and metadata.

use super::model::Model;
use super::server::Server;
use serde::{Deserialize, Serialize};

/// Human-facing contract metadata: title, version, and free-text description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    /// Contract title
    pub title: String,
    /// Contract version (semantic versioning recommended)
    pub version: String,
    /// Contract description (may span multiple lines)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContractInfo {
    /// Create contract metadata with the given title and version
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// DataContract - the root data contract document
///
/// Top-level structure holding contract metadata plus the models (tables)
/// described by the contract. Model and field order is preserved as given,
/// which fixes the order tables and fields appear in exported output.
///
/// # Example
///
/// ```rust
/// use datacontract_dbml::models::{DataContract, Field, Model};
///
/// let contract = DataContract::new("Orders", "1.0.0")
///     .with_description("Order management data")
///     .with_model(
///         Model::new("orders").with_fields(vec![
///             Field::new("id", "integer").with_primary(true).with_required(true),
///             Field::new("customer_id", "integer").with_required(true),
///         ]),
///     );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataContract {
    /// Unique contract ID (UUID or other identifier)
    pub id: String,
    /// Contract metadata
    pub info: ContractInfo,
    /// Models (tables) in this contract, in declaration order
    #[serde(default)]
    pub models: Vec<Model>,
    /// Server configurations describing where the data lives
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
}

impl DataContract {
    /// Create a new contract with the given title and version
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            info: ContractInfo::new(title, version),
            ..Default::default()
        }
    }

    /// Create a new contract with a specific ID
    pub fn new_with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            info: ContractInfo::new(title, version),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Add a model
    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    /// Set all models
    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    /// Add a server configuration
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Get the number of models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Get a model by name
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Get all model names, in declaration order
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    /// Parse a contract from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize the contract to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parse a contract from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the contract to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
