//! Route API module to communicate with the routing backend.

use log::{debug, error, info};
use route_agent_shared::config::Endpoints;
use route_agent_shared::queries::{ErrorBody, HealthStatus, RouteQuery, RouteResult};
use route_agent_shared::RouteError;
use serde::de::DeserializeOwned;

/// Anything that can answer route queries. The browser app uses [`HttpRouteApi`], tests swap in
/// fakes.
#[async_trait::async_trait(?Send)]
pub trait RouteApi {
    async fn compute_route(&self, query: &str) -> Result<RouteResult, RouteError>;
    async fn health(&self) -> Result<HealthStatus, RouteError>;
}

pub struct HttpRouteApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpRouteApi {
    pub fn new(endpoints: Endpoints) -> Self {
        HttpRouteApi {
            client: reqwest::Client::new(),
            endpoints,
        }
    }
}

/// Reads the whole body, then either decodes `T` or turns the failure into a [`RouteError`].
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RouteError> {
    let status = response.status();
    let body = response.text().await.map_err(RouteError::transport)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail);
        return Err(RouteError::backend(status.as_u16(), detail));
    }

    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to decode backend response: {}. Body: {}", e, body);
        RouteError::transport(e)
    })
}

#[async_trait::async_trait(?Send)]
impl RouteApi for HttpRouteApi {
    async fn compute_route(&self, query: &str) -> Result<RouteResult, RouteError> {
        debug!("POST {}", self.endpoints.route);

        let response = self
            .client
            .post(&self.endpoints.route)
            .json(&RouteQuery {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(RouteError::transport)?;

        decode_response(response).await
    }

    async fn health(&self) -> Result<HealthStatus, RouteError> {
        let response = self
            .client
            .get(&self.endpoints.health)
            .send()
            .await
            .map_err(RouteError::transport)?;

        let status: HealthStatus = decode_response(response).await?;
        info!(
            "Backend {} {} reports status {}",
            status.service, status.version, status.status
        );
        Ok(status)
    }
}
