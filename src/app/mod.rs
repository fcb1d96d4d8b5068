//! Application orchestration: bootstrap, the two search flows, the
//! directions flow, and live filtering, all driven by host events.

pub mod registry;

mod directions_flow;
mod featured;
mod filter;
mod search;

pub use directions_flow::{
    GEOLOCATION_FAILED_MESSAGE, GEOLOCATION_UNSUPPORTED_MESSAGE, ROUTING_FAILED_MESSAGE,
};
pub use featured::NO_RESULTS_MESSAGE;
pub use registry::{MarkerEntry, MarkerRegistry};

use crate::{
    core::{
        config::AppConfig,
        map::{Map, MapSdk},
    },
    directions::{
        source::{DirectionsSource, HttpDirectionsSource},
        DirectionsRenderer, DirectionsRequestBuilder,
    },
    geolocate::{Geolocator, HttpGeolocator},
    input::events::{AppEvent, EventQueue},
    places::source::{HttpPlacesSource, PlacesSource},
    ui::{
        alert::{AlertSink, LogAlertSink},
        info::InfoWindowManager,
        panel::Panel,
    },
};
use std::sync::Arc;

/// The map plus the two stateful directions collaborators, created together
/// at bootstrap and kept for the life of the app.
pub struct MapContext {
    pub map: Map,
    pub directions_builder: DirectionsRequestBuilder,
    pub directions_renderer: DirectionsRenderer,
}

/// The application. Owns all mutable state (map context, marker registry,
/// panels, info windows) and reacts to one host event at a time; every
/// handler takes `&mut self`, so construction ordering is enforced by
/// `Option<MapContext>` instead of ambient globals.
pub struct App {
    config: AppConfig,
    places: Arc<dyn PlacesSource>,
    directions: Arc<dyn DirectionsSource>,
    geolocator: Option<Arc<dyn Geolocator>>,
    alerts: Box<dyn AlertSink>,
    context: Option<MapContext>,
    registry: MarkerRegistry,
    featured_panel: Panel,
    info_windows: InfoWindowManager,
    events: EventQueue,
}

impl App {
    pub fn new(
        config: AppConfig,
        places: Arc<dyn PlacesSource>,
        directions: Arc<dyn DirectionsSource>,
    ) -> Self {
        Self {
            config,
            places,
            directions,
            geolocator: None,
            alerts: Box::new(LogAlertSink),
            context: None,
            registry: MarkerRegistry::new(),
            featured_panel: Panel::new(),
            info_windows: InfoWindowManager::new(),
            events: EventQueue::new(),
        }
    }

    /// Builds an app with HTTP providers from the configured endpoints
    pub fn with_http_providers(config: AppConfig) -> Self {
        let endpoints = &config.providers;

        let mut places = HttpPlacesSource::new(endpoints.places_url.clone());
        let mut directions = HttpDirectionsSource::new(endpoints.directions_url.clone());
        if let Some(api_key) = &endpoints.api_key {
            places = places.with_api_key(api_key.clone());
            directions = directions.with_api_key(api_key.clone());
        }
        let geolocator = HttpGeolocator::new(endpoints.geolocation_url.clone());

        Self::new(config, Arc::new(places), Arc::new(directions))
            .with_geolocator(Arc::new(geolocator))
    }

    /// Installs a geolocator. Without one, the directions flow reports
    /// geolocation as unsupported.
    pub fn with_geolocator(mut self, geolocator: Arc<dyn Geolocator>) -> Self {
        self.geolocator = Some(geolocator);
        self
    }

    pub fn with_alert_sink(mut self, alerts: Box<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn context(&self) -> Option<&MapContext> {
        self.context.as_ref()
    }

    pub fn map(&self) -> Option<&Map> {
        self.context.as_ref().map(|context| &context.map)
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    pub fn featured_panel(&self) -> &Panel {
        &self.featured_panel
    }

    pub fn info_windows(&self) -> &InfoWindowManager {
        &self.info_windows
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Drains the event queue and handles each event in arrival order
    pub async fn process_events(&mut self) {
        for event in self.events.drain() {
            self.handle_event(event).await;
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MapReady { sdk } => self.on_map_ready(sdk).await,
            AppEvent::MarkerClicked { marker_id } => self.on_marker_clicked(&marker_id),
            AppEvent::DirectionsRequested { destination, label } => {
                self.get_directions(destination, &label).await
            }
            AppEvent::FilterChanged { term } => self.apply_filter(&term),
        }
    }

    /// Bootstrap, invoked once by the host when the map backend is ready.
    /// Skips everything when the backend is unavailable. Otherwise builds
    /// the map and the directions collaborators, then runs the marker
    /// search and the featured search concurrently: the two calls are
    /// independent, finish in either order, and fail independently.
    pub async fn on_map_ready(&mut self, sdk: Option<MapSdk>) {
        let Some(sdk) = sdk else {
            log::error!("map backend failed to load");
            return;
        };

        log::info!(
            "initializing map at {} (zoom {})",
            self.config.map.center,
            self.config.map.zoom
        );

        let mut context = MapContext {
            map: Map::with_sdk(&sdk, self.config.map.center, self.config.map.zoom),
            directions_builder: DirectionsRequestBuilder::driving(),
            directions_renderer: DirectionsRenderer::new(),
        };
        let center = context.map.center();

        let (added, _) = futures::join!(
            search::find_breweries(
                &self.config,
                self.places.as_ref(),
                &mut context.map,
                &mut self.registry,
                &mut self.info_windows,
            ),
            featured::fetch_featured(
                &self.config,
                self.places.as_ref(),
                center,
                &mut self.featured_panel,
            ),
        );
        log::info!("bootstrap complete, {added} markers on the map");

        self.context = Some(context);
    }

    /// Opens the prepared info window for a clicked marker
    pub fn on_marker_clicked(&mut self, marker_id: &str) {
        log::debug!("marker clicked: {marker_id}");
        if !self.info_windows.open(marker_id) {
            log::warn!("click on unknown marker {marker_id:?}");
        }
    }
}
