use serde::{Deserialize, Serialize};

/// Connector type available in Kibana
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectorType {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub enabled_in_config: bool,

    #[serde(default)]
    pub enabled_in_license: bool,

    pub minimum_license_required: String,

    /// Features (e.g. `alerting`, `cases`) that can use this connector type
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub supported_feature_ids: Vec<String>,
}

impl_json_display!(ConnectorType);
