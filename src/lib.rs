//! # Brewmap
//!
//! A brewery-finder map application engine.
//!
//! The crate owns a map model with interactive markers, queries an external
//! places provider for nearby breweries, renders a featured top-rated panel,
//! computes driving directions from the caller's position, and filters
//! markers live against typed input. A host (demo binary, UI shell, or test)
//! drives the event loop and forwards typed events; everything else lives
//! here.

pub mod app;
pub mod core;
pub mod directions;
pub mod geolocate;
pub mod input;
pub mod layers;
pub(crate) mod net;
pub mod places;
pub mod prelude;
pub mod ui;

// Re-export public API
pub use crate::core::{
    config::AppConfig,
    geo::{LatLng, LatLngBounds, Point},
    map::{Map, MapSdk},
    viewport::Viewport,
};

pub use crate::layers::{
    marker::{Marker, MarkerIcon, MarkerLayer},
    route::RouteOverlay,
};

pub use crate::input::events::{AppEvent, EventQueue};

pub use crate::places::{PlaceResult, SearchStatus, TextSearchRequest, TextSearchResponse};

pub use crate::directions::{
    renderer::DirectionsRenderer, DirectionsRequestBuilder, Route, RouteRequest, RouteResponse,
    RouteStatus, TravelMode,
};

pub use crate::geolocate::Geolocator;

pub use crate::ui::{alert::AlertSink, info::InfoWindow, panel::Panel};

pub use crate::app::{App, MapContext, MarkerEntry, MarkerRegistry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Places search failed: {0}")]
    Places(String),

    #[error("Directions request failed: {0}")]
    Directions(String),

    #[error("Geolocation failed: {0}")]
    Geolocation(String),
}

/// Error type alias for convenience
pub type Error = MapError;
