//! Route requests against the external directions provider.

pub mod renderer;
pub mod source;

pub use renderer::DirectionsRenderer;
pub use source::{DirectionsSource, HttpDirectionsSource};

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// How the route should be traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Driving => write!(f, "driving"),
            TravelMode::Walking => write!(f, "walking"),
            TravelMode::Bicycling => write!(f, "bicycling"),
        }
    }
}

/// A single origin-to-destination route request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub travel_mode: TravelMode,
}

/// Builds route requests with the travel mode fixed at construction time.
/// One of the two stateful collaborators created at bootstrap; the other is
/// [`DirectionsRenderer`].
#[derive(Debug, Clone)]
pub struct DirectionsRequestBuilder {
    travel_mode: TravelMode,
}

impl DirectionsRequestBuilder {
    pub fn new(travel_mode: TravelMode) -> Self {
        Self { travel_mode }
    }

    /// Builder for driving routes
    pub fn driving() -> Self {
        Self::new(TravelMode::Driving)
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn build(&self, origin: LatLng, destination: LatLng) -> RouteRequest {
        RouteRequest {
            origin,
            destination,
            travel_mode: self.travel_mode,
        }
    }
}

/// Status field of a directions response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    Ok,
    NotFound,
    ZeroResults,
    /// Any status this crate doesn't know about
    #[serde(other)]
    Error,
}

/// A computed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    pub distance_meters: u64,
    pub duration_seconds: u64,
    /// Polyline from origin to destination
    pub path: Vec<LatLng>,
}

/// Full response to a route request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub status: RouteStatus,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl RouteResponse {
    /// True when the provider answered OK with at least one route
    pub fn is_usable(&self) -> bool {
        self.status == RouteStatus::Ok && !self.routes.is_empty()
    }

    /// The provider's preferred route, by convention the first one
    pub fn best_route(&self) -> Option<&Route> {
        self.routes.first()
    }
}
