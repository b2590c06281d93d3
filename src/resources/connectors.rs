use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{api_error, decode_body, encode_body, require_id, KibanaClient};
use crate::errors::Result;
use crate::types::{Connector, ConnectorCreateParams, ConnectorUpdateParams};

const BASE_PATH: &[&str] = &["api", "actions", "connector"];
const LIST_PATH: &[&str] = &["api", "actions", "connectors"];
const RESOURCE: &str = "connector";

/// Connector operations (`/api/actions/connector`)
#[derive(Clone, Copy)]
pub struct Connectors<'a> {
    client: &'a KibanaClient,
}

impl<'a> Connectors<'a> {
    pub(crate) fn new(client: &'a KibanaClient) -> Self {
        Self { client }
    }

    /// Fetch a connector by ID
    ///
    /// Returns `Ok(None)` when Kibana answers 404.
    #[instrument(name = "Connectors::get", skip_all, fields(id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<Connector>> {
        require_id(id, RESOURCE)?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let response = self.client.send(Method::GET, url, None).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Connector not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(response).await);
        }

        let connector: Connector = decode_body(response).await?;
        debug!(connector_name = %connector.name, "Connector fetched");
        Ok(Some(connector))
    }

    /// List every connector visible to the caller, preconfigured ones included
    #[instrument(name = "Connectors::list", skip_all)]
    pub async fn list(&self) -> Result<Vec<Connector>> {
        let url = self.client.endpoint(LIST_PATH, &[])?;
        let response = self.client.send(Method::GET, url, None).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let connectors: Vec<Connector> = decode_body(response).await?;
        debug!(count = connectors.len(), "Connectors listed");
        Ok(connectors)
    }

    /// Create a connector
    #[instrument(
        name = "Connectors::create",
        skip_all,
        fields(connector_name = %params.name, connector_type_id = %params.connector_type_id)
    )]
    pub async fn create(&self, params: &ConnectorCreateParams) -> Result<Connector> {
        params.validate()?;

        let url = self.client.endpoint(BASE_PATH, &[])?;
        let body = encode_body(params)?;
        let response = self.client.send(Method::POST, url, Some(body)).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let connector: Connector = decode_body(response).await?;
        debug!(id = %connector.id, "Connector created");
        Ok(connector)
    }

    /// Replace a connector's name, config and secrets
    #[instrument(name = "Connectors::update", skip_all, fields(id = %id))]
    pub async fn update(&self, id: &str, params: &ConnectorUpdateParams) -> Result<Connector> {
        require_id(id, RESOURCE)?;
        params.validate()?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let body = encode_body(params)?;
        let response = self.client.send(Method::PUT, url, Some(body)).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let connector: Connector = decode_body(response).await?;
        debug!("Connector updated");
        Ok(connector)
    }

    /// Delete a connector
    ///
    /// A 404 is reported as an error.
    #[instrument(name = "Connectors::delete", skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        require_id(id, RESOURCE)?;

        let url = self.client.endpoint(BASE_PATH, &[id])?;
        let response = self.client.send(Method::DELETE, url, None).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        debug!("Connector deleted");
        Ok(())
    }
}
