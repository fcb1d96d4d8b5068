//! Single-shot lookup of the caller's current position.

use crate::{core::geo::LatLng, net::HTTP_CLIENT, Error, Result};
use async_trait::async_trait;

/// Trait representing anything that can report the caller's position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Resolve the current position once. No continuous tracking.
    async fn locate(&self) -> Result<LatLng>;
}

/// Implementation that queries an HTTP geolocation endpoint returning a
/// `{ "lat": .., "lng": .. }` document.
pub struct HttpGeolocator {
    base_url: String,
}

impl HttpGeolocator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Geolocator for HttpGeolocator {
    async fn locate(&self) -> Result<LatLng> {
        let response = HTTP_CLIENT.get(&self.base_url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Geolocation(format!("HTTP {}", response.status())).into());
        }

        let position: LatLng = response.json().await?;
        if !position.is_valid() {
            return Err(Error::InvalidCoordinates(position.to_string()).into());
        }

        log::debug!("current position resolved to {position}");
        Ok(position)
    }
}

/// Always reports the same position. Useful for demos and tests.
pub struct FixedGeolocator {
    position: LatLng,
}

impl FixedGeolocator {
    pub fn new(position: LatLng) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn locate(&self) -> Result<LatLng> {
        Ok(self.position)
    }
}
