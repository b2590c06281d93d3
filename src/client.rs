use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::errors::{KibanaError, Result};
use crate::resources::{AlertRules, ConnectorTypes, Connectors, RuleTypes};

/// Header Kibana requires on every API call that is not a plain browser request
const XSRF_HEADER: &str = "kbn-xsrf";

/// Client for the Kibana alerting and actions APIs
///
/// The client only holds the transport and the base URL, so it is cheap to
/// clone and safe to share between tasks. Operations are grouped by resource
/// behind borrowed handles.
///
/// # Example
///
/// ```rust,no_run
/// use kibana_alerting_api::KibanaClient;
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
///     if let Some(rule) = client.alert_rules().get("my-rule").await? {
///         println!("{} is enabled: {}", rule.name, rule.enabled);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KibanaClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl KibanaClient {
    /// Create a new Kibana client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Kibana instance (e.g., `http://localhost:5601`).
    ///   A path prefix such as `/kibana` is kept in front of every API path.
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(KibanaError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self { client, base_url })
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// Use this to supply authentication headers, retry middleware, proxies
    /// and the like.
    pub fn with_client(client: ClientWithMiddleware, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Alert rule operations
    pub fn alert_rules(&self) -> AlertRules<'_> {
        AlertRules::new(self)
    }

    /// Rule type catalog
    pub fn rule_types(&self) -> RuleTypes<'_> {
        RuleTypes::new(self)
    }

    /// Connector operations
    pub fn connectors(&self) -> Connectors<'_> {
        Connectors::new(self)
    }

    /// Connector type catalog
    pub fn connector_types(&self) -> ConnectorTypes<'_> {
        ConnectorTypes::new(self)
    }

    /// Append `path` then `tail` to the base URL, percent-encoding each segment
    pub(crate) fn endpoint(&self, path: &[&str], tail: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| KibanaError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(path)
            .extend(tail);
        Ok(url)
    }

    /// Send a single request, attaching the JSON body if there is one
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        debug!(method = %method, url = %url, "Sending request to Kibana");

        let mut request = self
            .client
            .request(method, url)
            .header(XSRF_HEADER, "true");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(KibanaError::Request)?;

        debug!(status = response.status().as_u16(), "Kibana responded");
        Ok(response)
    }
}

/// Reject identifiers that cannot name a single path segment
///
/// URL normalization collapses `.` and `..`, which would point the request at
/// a different resource.
pub(crate) fn require_id(id: &str, resource: &str) -> Result<()> {
    if id.is_empty() {
        return Err(KibanaError::validation(format!(
            "You must provide the {resource} ID"
        )));
    }
    if id == "." || id == ".." {
        return Err(KibanaError::validation(format!(
            "Invalid {resource} ID: {id}"
        )));
    }
    Ok(())
}

pub(crate) fn encode_body<T: Serialize>(body: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(KibanaError::Serialize)
}

pub(crate) async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(KibanaError::ReadBody)?;
    serde_json::from_slice(&bytes).map_err(KibanaError::Deserialize)
}

/// Turn a rejected response into [`KibanaError::Api`], keeping the body verbatim
///
/// A body that cannot be read is reported as [`KibanaError::ReadBody`].
pub(crate) async fn api_error(response: Response) -> KibanaError {
    let status = response.status().as_u16();
    debug!(status, "Kibana rejected the request");
    match response.text().await {
        Ok(message) => KibanaError::Api { status, message },
        Err(err) => KibanaError::ReadBody(err),
    }
}
