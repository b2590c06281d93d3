use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{api_error, decode_body, encode_body, require_id, KibanaClient};
use crate::errors::Result;
use crate::types::{AlertRule, AlertRuleCreateParams, AlertRuleUpdateParams};

const BASE_PATH: &[&str] = &["api", "alerting", "rule"];
const RESOURCE: &str = "alert rule";

/// Alert rule operations (`/api/alerting/rule`)
///
/// # Example
///
/// ```rust,no_run
/// use kibana_alerting_api::{AlertRuleCreateParams, KibanaClient};
/// use serde_json::json;
/// use url::Url;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = KibanaClient::new(
///         Url::parse("http://localhost:5601")?,
///         Duration::from_secs(10),
///     )?;
///
///     let params = AlertRuleCreateParams::new("cpu-high", "alerts", ".index-threshold", "1m")
///         .with_params(json!({"index": ["metrics-*"], "threshold": [90]}));
///
///     let rule = client.alert_rules().create(&params).await?;
///     client.alert_rules().disable(&rule.id).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AlertRules<'a> {
    client: &'a KibanaClient,
}

impl<'a> AlertRules<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    /// Fetch a rule by ID
    ///
    /// Returns `Ok(None)` when Kibana answers 404.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is empty (no request is sent)
    /// - The HTTP request fails
    /// - Kibana returns any other non-success status code
    /// - The response body is not a valid rule
    #[instrument(name = "AlertRules::get", skip_all, fields(id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<AlertRule>> {
        require_id(id, RESOURCE)?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let response = self.client.send(Method::GET, url, None).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Alert rule not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(response).await);
        }

        let rule: AlertRule = decode_body(response).await?;
        debug!(rule_name = %rule.name, "Alert rule fetched");
        Ok(Some(rule))
    }

    /// Create a rule
    ///
    /// Kibana assigns the ID, audit fields and scheduled task.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required parameter is empty (no request is sent)
    /// - The HTTP request fails
    /// - Kibana returns a non-success status code
    #[instrument(
        name = "AlertRules::create",
        skip_all,
        fields(rule_name = %params.name, rule_type_id = %params.rule_type_id)
    )]
    pub async fn create(&self, params: &AlertRuleCreateParams) -> Result<AlertRule> {
        params.validate()?;

        let url = self.client.endpoint(BASE_PATH, &[])?;
        let body = encode_body(params)?;
        let response = self.client.send(Method::POST, url, Some(body)).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let rule: AlertRule = decode_body(response).await?;
        debug!(id = %rule.id, "Alert rule created");
        Ok(rule)
    }

    /// Replace the mutable fields of a rule
    ///
    /// Fields left unset in `params` are cleared rather than kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` or a required parameter is empty (no request is sent)
    /// - The HTTP request fails
    /// - Kibana returns a non-success status code
    #[instrument(name = "AlertRules::update", skip_all, fields(id = %id))]
    pub async fn update(&self, id: &str, params: &AlertRuleUpdateParams) -> Result<AlertRule> {
        require_id(id, RESOURCE)?;
        params.validate()?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let body = encode_body(params)?;
        let response = self.client.send(Method::PUT, url, Some(body)).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let rule: AlertRule = decode_body(response).await?;
        debug!("Alert rule updated");
        Ok(rule)
    }

    /// Delete a rule
    ///
    /// Unlike [`AlertRules::get`], a 404 is reported as an error.
    #[instrument(name = "AlertRules::delete", skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        require_id(id, RESOURCE)?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let response = self.client.send(Method::DELETE, url, None).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        debug!("Alert rule deleted");
        Ok(())
    }

    /// Enable a rule
    ///
    /// Only a 200 response counts as success.
    #[instrument(name = "AlertRules::enable", skip_all, fields(id = %id))]
    pub async fn enable(&self, id: &str) -> Result<()> {
        self.toggle(id, "enable").await
    }

    /// Disable a rule
    ///
    /// Only a 200 response counts as success.
    #[instrument(name = "AlertRules::disable", skip_all, fields(id = %id))]
    pub async fn disable(&self, id: &str) -> Result<()> {
        self.toggle(id, "disable").await
    }

    async fn toggle(&self, id: &str, action: &str) -> Result<()> {
        require_id(id, RESOURCE)?;

        let url = self.client.endpoint(BASE_PATH, &[id, action])?;
        let response = self.client.send(Method::POST, url, None).await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        debug!(action, "Alert rule state changed");
        Ok(())
    }
}
