use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rule type registered with Kibana's alerting framework
///
/// Rule types are defined by Kibana plugins and are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleType {
    pub id: String,
    pub name: String,

    /// Plugin that registered the rule type
    pub producer: String,

    pub default_action_group_id: String,
    pub minimum_license_required: String,

    #[serde(default)]
    pub rule_task_timeout: Option<String>,

    #[serde(default)]
    pub enabled_in_license: bool,

    #[serde(default)]
    pub is_exportable: bool,

    #[serde(default)]
    pub does_set_recovery_context: bool,

    #[serde(default)]
    pub action_variables: Value,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub action_groups: Vec<Value>,

    #[serde(default)]
    pub authorized_consumers: Value,

    #[serde(default)]
    pub recovery_action_group: Value,
}

impl_json_display!(RuleType);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_type_deserialization() {
        let rule_type: RuleType = serde_json::from_value(json!({
            "id": ".index-threshold",
            "name": "Index threshold",
            "producer": "stackAlerts",
            "default_action_group_id": "threshold met",
            "minimum_license_required": "basic",
            "rule_task_timeout": "5m",
            "enabled_in_license": true,
            "is_exportable": true,
            "does_set_recovery_context": true,
            "action_variables": {"context": [{"name": "message", "description": "A message"}]},
            "action_groups": [
                {"id": "threshold met", "name": "Threshold met"},
                {"id": "recovered", "name": "Recovered"}
            ],
            "authorized_consumers": {"alerts": {"read": true, "all": true}},
            "recovery_action_group": {"id": "recovered", "name": "Recovered"}
        }))
        .unwrap();

        assert_eq!(rule_type.producer, "stackAlerts");
        assert_eq!(rule_type.rule_task_timeout.as_deref(), Some("5m"));
        assert_eq!(rule_type.action_groups.len(), 2);
        assert_eq!(rule_type.authorized_consumers["alerts"]["all"], true);
        assert_eq!(rule_type.recovery_action_group["id"], "recovered");
    }

    #[test]
    fn test_null_action_groups() {
        let rule_type: RuleType = serde_json::from_value(json!({
            "id": ".es-query",
            "name": "Elasticsearch query",
            "producer": "stackAlerts",
            "default_action_group_id": "query matched",
            "minimum_license_required": "basic",
            "action_groups": null
        }))
        .unwrap();

        assert!(rule_type.action_groups.is_empty());
    }
}
