use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{KibanaError, Result};

/// Connector as reported by Kibana
///
/// Kibana never returns a connector's secrets, so there is no field for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connector {
    pub id: String,
    pub name: String,

    /// Connector type such as `.email`, `.slack` or `.webhook`
    pub connector_type_id: String,

    #[serde(default)]
    pub is_preconfigured: bool,

    #[serde(default)]
    pub is_deprecated: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_missing_secrets: Option<bool>,

    /// Number of rules referencing this connector (list responses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_by_count: Option<u64>,

    /// Connector-type-specific configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

impl_json_display!(Connector);

/// Body of a connector creation request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectorCreateParams {
    pub name: String,
    pub connector_type_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,

    /// Write-only; never echoed back by Kibana
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Map<String, Value>>,
}

impl ConnectorCreateParams {
    /// Create parameters for a connector of type `connector_type_id`
    pub fn new(name: &str, connector_type_id: &str) -> Self {
        Self {
            name: name.to_string(),
            connector_type_id: connector_type_id.to_string(),
            config: None,
            secrets: None,
        }
    }

    /// Set the connector-type-specific configuration
    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set credentials; Kibana stores them but never returns them
    pub fn with_secrets(mut self, secrets: Map<String, Value>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_field(&self.name, "name")?;
        require_field(&self.connector_type_id, "connector_type_id")
    }
}

/// Body of a connector update request
///
/// The connector type is fixed at creation and cannot be updated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectorUpdateParams {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Map<String, Value>>,
}

impl ConnectorUpdateParams {
    /// Create an update that renames the connector and clears config and secrets
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: None,
            secrets: None,
        }
    }

    /// Set the connector-type-specific configuration
    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set credentials; Kibana stores them but never returns them
    pub fn with_secrets(mut self, secrets: Map<String, Value>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_field(&self.name, "name")
    }
}

fn require_field(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KibanaError::validation(format!(
            "You must provide the connector {field}"
        )));
    }
    Ok(())
}
