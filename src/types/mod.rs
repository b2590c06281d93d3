//! Wire representations of Kibana alerting and actions resources.
//!
//! Field names match the API's snake_case JSON. Fields whose shape depends on
//! the rule or connector type are kept as [`serde_json::Value`] and passed
//! through untouched.

/// Render a resource as its compact JSON form
macro_rules! impl_json_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

/// Read a JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

mod alert_rule;
mod connector;
mod connector_type;
mod rule_type;

pub use alert_rule::{
    AlertRule, AlertRuleAction, AlertRuleCreateParams, AlertRuleSchedule, AlertRuleUpdateParams,
    NotifyWhen,
};
pub use connector::{Connector, ConnectorCreateParams, ConnectorUpdateParams};
pub use connector_type::ConnectorType;
pub use rule_type::RuleType;
