//! Per-resource operation handles borrowed from [`crate::KibanaClient`].

mod alert_rules;
mod connector_types;
mod connectors;
mod rule_types;

pub use alert_rules::AlertRules;
pub use connector_types::ConnectorTypes;
pub use connectors::Connectors;
pub use rule_types::RuleTypes;
