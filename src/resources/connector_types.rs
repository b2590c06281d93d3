use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::{api_error, decode_body, KibanaClient};
use crate::errors::Result;
use crate::types::ConnectorType;

const LIST_PATH: &[&str] = &["api", "actions", "connector_types"];

/// Connector type catalog (`/api/actions/connector_types`)
#[derive(Clone, Copy)]
pub struct ConnectorTypes<'a> {
    client: &'a KibanaClient,
}

impl<'a> ConnectorTypes<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    /// List the connector types Kibana knows about
    #[instrument(name = "ConnectorTypes::list", skip_all)]
    pub async fn list(&self) -> Result<Vec<ConnectorType>> {
        let url = self.client.endpoint(LIST_PATH, &[])?;
        let response = self.client.send(Method::GET, url, None).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let connector_types: Vec<ConnectorType> = decode_body(response).await?;
        debug!(count = connector_types.len(), "Connector types listed");
        Ok(connector_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(mock_server: &MockServer) -> KibanaClient {
        KibanaClient::new(
            Url::parse(&mock_server.uri()).unwrap(),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_connector_types() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/actions/connector_types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": ".email",
                    "name": "Email",
                    "enabled": true,
                    "enabled_in_config": true,
                    "enabled_in_license": true,
                    "minimum_license_required": "gold",
                    "supported_feature_ids": ["alerting", "cases"]
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let types = client.connector_types().list().await.unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].id, ".email");
        assert_eq!(types[0].minimum_license_required, "gold");
        assert_eq!(types[0].supported_feature_ids, vec!["alerting", "cases"]);
        assert_eq!(
            types[0].to_string(),
            r#"{"id":".email","name":"Email","enabled":true,"enabled_in_config":true,"enabled_in_license":true,"minimum_license_required":"gold","supported_feature_ids":["alerting","cases"]}"#
        );
    }

    #[tokio::test]
    async fn test_list_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/actions/connector_types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        assert!(client.connector_types().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_server_error_is_retryable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/actions/connector_types"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service unavailable"))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let err = client.connector_types().list().await.unwrap_err();
        assert!(err.is_retryable());
    }
}
