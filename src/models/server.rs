//! Server type - a named target physical type system (dialect descriptor).

use serde::{Deserialize, Serialize};

/// Server - where contract data physically lives
///
/// The `server_type` names the target dialect (e.g. `"postgres"`,
/// `"snowflake"`, `"databricks"`). Exporters use it to resolve logical
/// field types to the dialect's physical types; a contract exported
/// without a server keeps its logical types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server name/identifier (e.g. "production")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Server type naming the SQL dialect
    #[serde(rename = "type")]
    pub server_type: String,
    /// Server environment (e.g. "production", "development")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Server description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Server {
    /// Create a new server with the given dialect type
    pub fn new(server_type: impl Into<String>) -> Self {
        Self {
            server_type: server_type.into(),
            ..Default::default()
        }
    }

    /// Set the server name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
