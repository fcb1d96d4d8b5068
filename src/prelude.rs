//! Prelude module for common brewmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use brewmap::prelude::*;`

pub use crate::core::{
    config::{
        AppConfig, FeaturedConfig, MapConfig, MarkerIconConfig, ProviderEndpoints, SearchConfig,
    },
    geo::{LatLng, LatLngBounds, Point},
    map::{Map, MapSdk},
    viewport::Viewport,
};

pub use crate::layers::{
    marker::{Marker, MarkerIcon, MarkerId, MarkerLayer},
    route::{RouteOverlay, StrokeStyle},
};

pub use crate::input::events::{AppEvent, EventQueue};

pub use crate::places::{
    source::{HttpPlacesSource, PlacesSource},
    PlaceResult, SearchStatus, TextSearchRequest, TextSearchResponse,
};

pub use crate::directions::{
    renderer::DirectionsRenderer,
    source::{DirectionsSource, HttpDirectionsSource},
    DirectionsRequestBuilder, Route, RouteRequest, RouteResponse, RouteStatus, TravelMode,
};

pub use crate::geolocate::{FixedGeolocator, Geolocator, HttpGeolocator};

pub use crate::ui::{
    alert::{AlertSink, LogAlertSink},
    info::{DirectionsTarget, InfoWindow, InfoWindowManager},
    panel::{Panel, PanelBlock, PanelContent},
};

pub use crate::app::{App, MapContext, MarkerEntry, MarkerRegistry};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
