use crate::{
    directions::{RouteRequest, RouteResponse},
    net::HTTP_CLIENT,
    Error, Result,
};
use async_trait::async_trait;

/// Trait representing anything that can compute a route between two
/// coordinates.
#[async_trait]
pub trait DirectionsSource: Send + Sync {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse>;
}

/// Implementation that queries a configured HTTP directions endpoint.
pub struct HttpDirectionsSource {
    base_url: String,
    api_key: Option<String>,
}

impl HttpDirectionsSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl DirectionsSource for HttpDirectionsSource {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse> {
        let mut params = vec![
            ("origin", request.origin.to_string()),
            ("destination", request.destination.to_string()),
            ("mode", request.travel_mode.to_string()),
        ];
        if let Some(api_key) = &self.api_key {
            params.push(("key", api_key.clone()));
        }

        log::debug!(
            "route request {} -> {} ({})",
            request.origin,
            request.destination,
            request.travel_mode
        );

        let response = HTTP_CLIENT.get(&self.base_url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(Error::Directions(format!("HTTP {}", response.status())).into());
        }

        let body: RouteResponse = response.json().await?;
        log::info!("route request answered with {:?}", body.status);
        Ok(body)
    }
}
