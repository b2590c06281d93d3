//! # Kibana Alerting API
//!
//! A typed Rust client for the [Kibana alerting and actions APIs](https://www.elastic.co/guide/en/kibana/current/alerting-apis.html).
//!
//! ## Features
//!
//! - Create, fetch, update, delete, enable and disable alert rules
//! - Create, fetch, list, update and delete connectors
//! - List the rule types and connector types Kibana offers
//! - Rule and connector parameters passed through as raw JSON
//! - Local validation before anything is sent, kept apart from Kibana's own errors
//!
//! ## Example
//!
//! ```rust,no_run
//! use kibana_alerting_api::{AlertRuleAction, AlertRuleCreateParams, KibanaClient, NotifyWhen};
//! use serde_json::json;
//! use url::Url;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KibanaClient::new(
//!         Url::parse("http://localhost:5601")?,
//!         Duration::from_secs(10),
//!     )?;
//!
//!     let params = AlertRuleCreateParams::new("HighMemoryUsage", "alerts", ".index-threshold", "1m")
//!         .with_params(json!({
//!             "index": ["metrics-*"],
//!             "timeField": "@timestamp",
//!             "aggType": "avg",
//!             "aggField": "system.memory.used.pct",
//!             "thresholdComparator": ">",
//!             "threshold": [0.9],
//!             "timeWindowSize": 5,
//!             "timeWindowUnit": "m"
//!         }))
//!         .with_tag("memory")
//!         .with_notify_when(NotifyWhen::OnActionGroupChange)
//!         .with_action(AlertRuleAction::new(
//!             "my-slack-connector",
//!             "threshold met",
//!             json!({"message": "Memory usage is above 90%"}),
//!         ));
//!
//!     let rule = client.alert_rules().create(&params).await?;
//!     println!("created rule {}", rule.id);
//!     Ok(())
//! }
//! ```

mod client;
mod errors;
mod resources;
mod types;

pub use client::KibanaClient;
pub use errors::{KibanaError, Result, VALIDATION_ERROR_CODE};
pub use resources::{AlertRules, ConnectorTypes, Connectors, RuleTypes};
pub use types::{
    AlertRule, AlertRuleAction, AlertRuleCreateParams, AlertRuleSchedule, AlertRuleUpdateParams,
    Connector, ConnectorCreateParams, ConnectorType, ConnectorUpdateParams, NotifyWhen, RuleType,
};
