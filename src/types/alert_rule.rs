use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

use crate::errors::{KibanaError, Result};

/// When a rule's actions run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum NotifyWhen {
    /// Every time the rule runs and an alert is active
    OnActiveAlert,
    /// Only when the alert moves to a different action group
    OnActionGroupChange,
    /// At most once per throttle interval while active
    OnThrottleInterval,
}

impl Display for NotifyWhen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyWhen::OnActiveAlert => write!(f, "onActiveAlert"),
            NotifyWhen::OnActionGroupChange => write!(f, "onActionGroupChange"),
            NotifyWhen::OnThrottleInterval => write!(f, "onThrottleInterval"),
        }
    }
}

/// How often a rule is evaluated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AlertRuleSchedule {
    /// Interval such as `1m` or `30s`
    pub interval: String,
}

impl AlertRuleSchedule {
    /// Evaluate every `interval` (e.g. `1m`)
    pub fn every(interval: &str) -> Self {
        Self {
            interval: interval.to_string(),
        }
    }
}

/// Binding from a rule to a connector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRuleAction {
    /// Connector ID
    pub id: String,

    /// Action group that triggers this action
    pub group: String,

    /// Connector-specific parameters
    #[serde(default)]
    pub params: Value,
}

impl AlertRuleAction {
    /// Run `connector_id` with `params` when the rule hits `group`
    pub fn new(connector_id: &str, group: &str, params: Value) -> Self {
        Self {
            id: connector_id.to_string(),
            group: group.to_string(),
            params,
        }
    }
}

/// Alert rule as reported by Kibana
///
/// `id`, the audit fields and `scheduled_task_id` are assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRule {
    pub id: String,
    pub name: String,

    /// Feature that owns the rule (e.g. `alerts`, `siem`)
    pub consumer: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    pub schedule: AlertRuleSchedule,

    /// Rule-type-specific parameters
    #[serde(default)]
    pub params: Value,

    pub rule_type_id: String,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub updated_by: Option<String>,

    /// Parsed timestamp; re-serializing drops trailing zero fractions, so
    /// `10:00:00.000Z` comes back out as `10:00:00Z`
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Parsed timestamp, rendered the same way as `created_at`
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub api_key_owner: Option<String>,

    #[serde(default)]
    pub notify_when: Option<NotifyWhen>,

    #[serde(default)]
    pub mute_all: bool,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub muted_alert_ids: Vec<String>,

    #[serde(default)]
    pub scheduled_task_id: Option<String>,

    #[serde(default)]
    pub execution_status: Value,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub actions: Vec<AlertRuleAction>,
}

impl_json_display!(AlertRule);

/// Body of a rule creation request
///
/// # Example
///
/// ```rust
/// use kibana_alerting_api::{AlertRuleCreateParams, AlertRuleAction, NotifyWhen};
/// use serde_json::json;
///
/// let params = AlertRuleCreateParams::new("cpu-high", "alerts", ".index-threshold", "1m")
///     .with_params(json!({"index": ["metrics-*"], "threshold": [90]}))
///     .with_tag("infra")
///     .with_notify_when(NotifyWhen::OnActionGroupChange)
///     .with_action(AlertRuleAction::new("slack-ops", "threshold met", json!({"message": "CPU high"})));
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertRuleCreateParams {
    pub name: String,
    pub consumer: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    pub schedule: AlertRuleSchedule,
    pub params: Value,
    pub rule_type_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when: Option<NotifyWhen>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<AlertRuleAction>,
}

impl AlertRuleCreateParams {
    /// Create parameters for a new rule
    ///
    /// `params` starts out as an empty JSON object.
    pub fn new(name: &str, consumer: &str, rule_type_id: &str, interval: &str) -> Self {
        Self {
            name: name.to_string(),
            consumer: consumer.to_string(),
            tags: Vec::new(),
            throttle: None,
            enabled: None,
            schedule: AlertRuleSchedule::every(interval),
            params: Value::Object(Default::default()),
            rule_type_id: rule_type_id.to_string(),
            notify_when: None,
            actions: Vec::new(),
        }
    }

    /// Set the rule-type-specific parameters
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Set the minimum time between repeated notifications (e.g. `10m`)
    pub fn with_throttle(mut self, throttle: &str) -> Self {
        self.throttle = Some(throttle.to_string());
        self
    }

    /// Set whether the rule starts enabled (Kibana's default is enabled)
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set when actions run
    pub fn with_notify_when(mut self, notify_when: NotifyWhen) -> Self {
        self.notify_when = Some(notify_when);
        self
    }

    /// Add an action
    pub fn with_action(mut self, action: AlertRuleAction) -> Self {
        self.actions.push(action);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_field(&self.name, "name")?;
        require_field(&self.consumer, "consumer")?;
        require_field(&self.rule_type_id, "rule_type_id")?;
        require_field(&self.schedule.interval, "schedule.interval")
    }
}

/// Body of a rule update request
///
/// Updates replace every mutable field, so anything left unset here is
/// cleared on the server. Build from a fetched [`AlertRule`] to change only a
/// few fields. The rule type, consumer and enabled state cannot be changed
/// through an update.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertRuleUpdateParams {
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<String>,

    pub schedule: AlertRuleSchedule,
    pub params: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when: Option<NotifyWhen>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<AlertRuleAction>,
}

impl AlertRuleUpdateParams {
    /// Create an update with empty params and no tags, throttle or actions
    pub fn new(name: &str, interval: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
            throttle: None,
            schedule: AlertRuleSchedule::every(interval),
            params: Value::Object(Default::default()),
            notify_when: None,
            actions: Vec::new(),
        }
    }

    /// Set the rule-type-specific parameters
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Set the minimum time between repeated notifications (e.g. `10m`)
    pub fn with_throttle(mut self, throttle: &str) -> Self {
        self.throttle = Some(throttle.to_string());
        self
    }

    /// Set when actions run
    pub fn with_notify_when(mut self, notify_when: NotifyWhen) -> Self {
        self.notify_when = Some(notify_when);
        self
    }

    /// Add an action
    pub fn with_action(mut self, action: AlertRuleAction) -> Self {
        self.actions.push(action);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_field(&self.name, "name")?;
        require_field(&self.schedule.interval, "schedule.interval")
    }
}

impl From<&AlertRule> for AlertRuleUpdateParams {
    fn from(rule: &AlertRule) -> Self {
        Self {
            name: rule.name.clone(),
            tags: rule.tags.clone(),
            throttle: rule.throttle.clone(),
            schedule: rule.schedule.clone(),
            params: rule.params.clone(),
            notify_when: rule.notify_when,
            actions: rule.actions.clone(),
        }
    }
}

fn require_field(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KibanaError::validation(format!(
            "You must provide the alert rule {field}"
        )));
    }
    Ok(())
}
