use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::{api_error, decode_body, KibanaClient};
use crate::errors::Result;
use crate::types::RuleType;

const LIST_PATH: &[&str] = &["api", "alerting", "rule_types"];

/// Rule type catalog (`/api/alerting/rule_types`)
#[derive(Clone, Copy)]
pub struct RuleTypes<'a> {
    client: &'a KibanaClient,
}

impl<'a> RuleTypes<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    /// List the rule types registered with Kibana
    #[instrument(name = "RuleTypes::list", skip_all)]
    pub async fn list(&self) -> Result<Vec<RuleType>> {
        let url = self.client.endpoint(LIST_PATH, &[])?;
        let response = self.client.send(Method::GET, url, None).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let rule_types: Vec<RuleType> = decode_body(response).await?;
        debug!(count = rule_types.len(), "Rule types listed");
        Ok(rule_types)
    }
}
