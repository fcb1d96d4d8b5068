use crate::{
    net::HTTP_CLIENT,
    places::{TextSearchRequest, TextSearchResponse},
    Error, Result,
};
use async_trait::async_trait;

/// Trait representing anything that can answer a places text search.
#[async_trait]
pub trait PlacesSource: Send + Sync {
    async fn text_search(&self, request: &TextSearchRequest) -> Result<TextSearchResponse>;
}

/// Implementation that queries a configured HTTP places endpoint.
pub struct HttpPlacesSource {
    base_url: String,
    api_key: Option<String>,
}

impl HttpPlacesSource {
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
impl PlacesSource for HttpPlacesSource {
    async fn text_search(&self, request: &TextSearchRequest) -> Result<TextSearchResponse> {
        let mut params = vec![
            ("query", request.query.clone()),
            ("lat", request.location.lat.to_string()),
            ("lng", request.location.lng.to_string()),
            ("radius", request.radius_m.to_string()),
        ];
        if let Some(api_key) = &self.api_key {
            params.push(("key", api_key.clone()));
        }

        log::debug!(
            "places text search {:?} around {} (radius {} m)",
            request.query,
            request.location,
            request.radius_m
        );

        let response = HTTP_CLIENT.get(&self.base_url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(Error::Places(format!("HTTP {}", response.status())).into());
        }

        let body: TextSearchResponse = response.json().await?;
        log::info!(
            "places search returned {} results ({:?})",
            body.results.len(),
            body.status
        );
        Ok(body)
    }
}
