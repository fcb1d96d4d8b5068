//! Integration tests for the full application flow: bootstrap, searches,
//! directions, and filtering, driven through mock providers.

use async_trait::async_trait;
use brewmap::{
    app::{
        App, GEOLOCATION_FAILED_MESSAGE, GEOLOCATION_UNSUPPORTED_MESSAGE, NO_RESULTS_MESSAGE,
        ROUTING_FAILED_MESSAGE,
    },
    core::{config::AppConfig, geo::LatLng, map::MapSdk},
    directions::{
        source::DirectionsSource, Route, RouteRequest, RouteResponse, RouteStatus,
    },
    geolocate::{FixedGeolocator, Geolocator},
    input::events::AppEvent,
    places::{
        source::PlacesSource, PlaceResult, SearchStatus, TextSearchRequest, TextSearchResponse,
    },
    ui::{alert::AlertSink, panel::PanelContent},
    Error,
};
use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

fn place(name: &str, rating: Option<f64>, categories: &[&str]) -> PlaceResult {
    PlaceResult {
        name: name.to_string(),
        address: format!("{name} address"),
        rating,
        location: LatLng::new(28.54, -81.38),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

fn ok_response(results: Vec<PlaceResult>) -> TextSearchResponse {
    TextSearchResponse {
        status: SearchStatus::Ok,
        results,
        error_message: None,
    }
}

/// Places mock that replays queued responses, then errors. Counts calls.
struct MockPlaces {
    responses: Mutex<VecDeque<brewmap::Result<TextSearchResponse>>>,
    calls: AtomicUsize,
}

impl MockPlaces {
    fn new(responses: Vec<brewmap::Result<TextSearchResponse>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Both bootstrap searches get the same canned answer
    fn always(response: TextSearchResponse) -> Arc<Self> {
        Self::new(vec![Ok(response.clone()), Ok(response)])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlacesSource for MockPlaces {
    async fn text_search(
        &self,
        _request: &TextSearchRequest,
    ) -> brewmap::Result<TextSearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".into()))
    }
}

/// Directions mock that routes straight from origin to destination
struct MockDirections {
    status: RouteStatus,
    calls: AtomicUsize,
}

impl MockDirections {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            status: RouteStatus::Ok,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(status: RouteStatus) -> Arc<Self> {
        Arc::new(Self {
            status,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsSource for MockDirections {
    async fn route(&self, request: &RouteRequest) -> brewmap::Result<RouteResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.status != RouteStatus::Ok {
            return Ok(RouteResponse {
                status: self.status,
                routes: vec![],
                error_message: None,
            });
        }
        Ok(RouteResponse {
            status: RouteStatus::Ok,
            routes: vec![Route {
                summary: "mock route".to_string(),
                distance_meters: 1000,
                duration_seconds: 60,
                path: vec![request.origin, request.destination],
            }],
            error_message: None,
        })
    }
}

/// Geolocator that always fails, as a denied permission would
struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn locate(&self) -> brewmap::Result<LatLng> {
        Err(Error::Geolocation("permission denied".to_string()).into())
    }
}

/// Alert sink that records every message for inspection
#[derive(Clone, Default)]
struct RecordingAlerts {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlerts {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn sdk() -> Option<MapSdk> {
    Some(MapSdk::new(1024.0, 768.0))
}

fn origin() -> LatLng {
    LatLng::new(28.4813, -81.5090)
}

#[tokio::test]
async fn bootstrap_without_backend_issues_no_calls() {
    let places = MockPlaces::always(ok_response(vec![place("Hop House", Some(4.5), &[])]));
    let directions = MockDirections::ok();
    let mut app = App::new(AppConfig::default(), places.clone(), directions);

    app.on_map_ready(None).await;

    assert!(app.map().is_none());
    assert!(app.registry().is_empty());
    assert_eq!(places.calls(), 0);
    assert!(app.featured_panel().is_empty());
}

#[tokio::test]
async fn bootstrap_creates_one_entry_per_result() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &["brewery", "bar"]),
        place("Ale Works", None, &["brewery"]),
    ]));
    let mut app = App::new(AppConfig::default(), places.clone(), MockDirections::ok());

    app.on_map_ready(sdk()).await;

    // one call for markers, one independent call for the featured panel
    assert_eq!(places.calls(), 2);

    let map = app.map().expect("map installed");
    assert_eq!(app.registry().len(), 2);
    assert_eq!(map.markers().len(), 2);
    assert_eq!(map.markers().attached_count(), 2);
    assert_eq!(app.info_windows().len(), 2);

    // names are lowercased at registration
    let names: Vec<&str> = app.registry().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["hop house", "ale works"]);
}

#[tokio::test]
async fn failed_search_leaves_prior_entries_untouched() {
    let first = ok_response(vec![
        place("Hop House", Some(4.5), &[]),
        place("Ale Works", None, &[]),
    ]);
    // two OK answers for the first bootstrap, errors afterwards
    let places = MockPlaces::new(vec![Ok(first.clone()), Ok(first)]);
    let mut app = App::new(AppConfig::default(), places.clone(), MockDirections::ok());

    app.on_map_ready(sdk()).await;
    assert_eq!(app.registry().len(), 2);

    app.on_map_ready(sdk()).await;

    assert_eq!(places.calls(), 4);
    assert_eq!(app.registry().len(), 2, "failed search must not change entries");
    assert_eq!(
        app.featured_panel().content(),
        &PanelContent::Message(NO_RESULTS_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn non_ok_status_yields_zero_entries() {
    let empty = TextSearchResponse {
        status: SearchStatus::ZeroResults,
        results: vec![],
        error_message: None,
    };
    let places = MockPlaces::always(empty);
    let mut app = App::new(AppConfig::default(), places, MockDirections::ok());

    app.on_map_ready(sdk()).await;

    assert!(app.registry().is_empty());
    assert_eq!(app.map().unwrap().markers().len(), 0);
    assert_eq!(
        app.featured_panel().content(),
        &PanelContent::Message(NO_RESULTS_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn featured_panel_sorts_by_rating_and_limits_to_five() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &[]),
        place("Ale Works", None, &[]),
        place("Barrel & Vine", Some(4.8), &[]),
        place("Coppertail Station", Some(4.1), &[]),
        place("Swamp Fox Brewing", Some(3.9), &[]),
        place("Citrus Grove Taproom", Some(4.6), &[]),
    ]));
    let mut app = App::new(AppConfig::default(), places, MockDirections::ok());

    app.on_map_ready(sdk()).await;

    let blocks = app.featured_panel().blocks().expect("blocks rendered");
    let titles: Vec<&str> = blocks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Barrel & Vine",
            "Citrus Grove Taproom",
            "Hop House",
            "Coppertail Station",
            "Swamp Fox Brewing",
        ],
        "five entries, best rated first, the unrated place dropped"
    );
    assert_eq!(blocks[2].rating, "4.5");
}

#[tokio::test]
async fn featured_scenario_missing_rating_sorts_last() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &["brewery"]),
        place("Ale Works", None, &["brewery"]),
    ]));
    let mut app = App::new(AppConfig::default(), places, MockDirections::ok());

    app.on_map_ready(sdk()).await;

    let blocks = app.featured_panel().blocks().expect("blocks rendered");
    assert_eq!(blocks[0].title, "Hop House");
    assert_eq!(blocks[1].title, "Ale Works");
    assert_eq!(blocks[1].rating, "Not available");
}

#[tokio::test]
async fn filter_matches_name_or_category_case_insensitively() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &["brewery", "bar"]),
        place("Ale Works", None, &["Taproom"]),
    ]));
    let mut app = App::new(AppConfig::default(), places, MockDirections::ok());
    app.on_map_ready(sdk()).await;

    // name substring, mixed case input
    app.apply_filter("ALE");
    let map = app.map().unwrap();
    assert!(!map.markers().is_attached("place-0"), "Hop House hidden");
    assert!(map.markers().is_attached("place-1"), "Ale Works shown");

    // category substring
    app.apply_filter("bar");
    let map = app.map().unwrap();
    assert!(map.markers().is_attached("place-0"));
    assert!(!map.markers().is_attached("place-1"));

    // mixed-case category data still matches
    app.apply_filter("taproom");
    let map = app.map().unwrap();
    assert!(!map.markers().is_attached("place-0"));
    assert!(map.markers().is_attached("place-1"));

    // no match hides everything; markers survive hidden
    app.apply_filter("cidery");
    let map = app.map().unwrap();
    assert_eq!(map.markers().attached_count(), 0);
    assert_eq!(map.markers().len(), 2);

    // the empty term restores all markers
    app.apply_filter("");
    let map = app.map().unwrap();
    assert_eq!(map.markers().attached_count(), 2);
}

#[tokio::test]
async fn directions_with_denied_geolocation_never_calls_router() {
    let places = MockPlaces::always(ok_response(vec![place("Hop House", Some(4.5), &[])]));
    let directions = MockDirections::ok();
    let alerts = RecordingAlerts::default();
    let mut app = App::new(AppConfig::default(), places, directions.clone())
        .with_geolocator(Arc::new(DeniedGeolocator))
        .with_alert_sink(Box::new(alerts.clone()));
    app.on_map_ready(sdk()).await;

    app.get_directions(LatLng::new(28.54, -81.38), "Hop House").await;

    assert_eq!(directions.calls(), 0);
    assert_eq!(alerts.messages(), vec![GEOLOCATION_FAILED_MESSAGE.to_string()]);
    assert!(app.map().unwrap().route_overlay().is_none());
}

#[tokio::test]
async fn directions_without_geolocator_reports_unsupported() {
    let places = MockPlaces::always(ok_response(vec![place("Hop House", Some(4.5), &[])]));
    let directions = MockDirections::ok();
    let alerts = RecordingAlerts::default();
    let mut app = App::new(AppConfig::default(), places, directions.clone())
        .with_alert_sink(Box::new(alerts.clone()));
    app.on_map_ready(sdk()).await;

    app.get_directions(LatLng::new(28.54, -81.38), "Hop House").await;

    assert_eq!(directions.calls(), 0);
    assert_eq!(
        alerts.messages(),
        vec![GEOLOCATION_UNSUPPORTED_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn directions_before_bootstrap_aborts_silently() {
    let places = MockPlaces::always(ok_response(vec![]));
    let directions = MockDirections::ok();
    let alerts = RecordingAlerts::default();
    let mut app = App::new(AppConfig::default(), places, directions.clone())
        .with_geolocator(Arc::new(FixedGeolocator::new(origin())))
        .with_alert_sink(Box::new(alerts.clone()));

    app.get_directions(LatLng::new(28.54, -81.38), "Hop House").await;

    assert_eq!(directions.calls(), 0);
    assert!(alerts.messages().is_empty(), "precondition failures only log");
}

#[tokio::test]
async fn second_route_replaces_the_first() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &[]),
        place("Ale Works", None, &[]),
    ]));
    let directions = MockDirections::ok();
    let mut app = App::new(AppConfig::default(), places, directions.clone())
        .with_geolocator(Arc::new(FixedGeolocator::new(origin())));
    app.on_map_ready(sdk()).await;

    let first_destination = LatLng::new(28.54, -81.38);
    let second_destination = LatLng::new(28.60, -81.35);

    app.get_directions(first_destination, "Hop House").await;
    app.get_directions(second_destination, "Barrel & Vine").await;

    assert_eq!(directions.calls(), 2);

    let map = app.map().unwrap();
    let overlay = map.route_overlay().expect("one route rendered");
    assert_eq!(overlay.path().last(), Some(&second_destination));

    let context = app.context().unwrap();
    assert_eq!(context.directions_renderer.rendered_count(), 2);
}

#[tokio::test]
async fn routing_failure_surfaces_alert_and_renders_nothing() {
    let places = MockPlaces::always(ok_response(vec![place("Hop House", Some(4.5), &[])]));
    let directions = MockDirections::failing(RouteStatus::NotFound);
    let alerts = RecordingAlerts::default();
    let mut app = App::new(AppConfig::default(), places, directions.clone())
        .with_geolocator(Arc::new(FixedGeolocator::new(origin())))
        .with_alert_sink(Box::new(alerts.clone()));
    app.on_map_ready(sdk()).await;

    app.get_directions(LatLng::new(28.54, -81.38), "Hop House").await;

    assert_eq!(directions.calls(), 1);
    assert_eq!(alerts.messages(), vec![ROUTING_FAILED_MESSAGE.to_string()]);
    assert!(app.map().unwrap().route_overlay().is_none());
}

#[tokio::test]
async fn events_drive_the_same_flows() {
    let places = MockPlaces::always(ok_response(vec![
        place("Hop House", Some(4.5), &["brewery"]),
        place("Ale Works", None, &["brewery"]),
    ]));
    let mut app = App::new(AppConfig::default(), places, MockDirections::ok())
        .with_geolocator(Arc::new(FixedGeolocator::new(origin())));

    app.events().push(AppEvent::MapReady { sdk: sdk() });
    app.process_events().await;
    assert_eq!(app.registry().len(), 2);

    app.events().push(AppEvent::MarkerClicked {
        marker_id: "place-1".to_string(),
    });
    app.events().push(AppEvent::FilterChanged {
        term: "hop".to_string(),
    });
    app.process_events().await;

    let window = app.info_windows().open_window().expect("window open");
    assert_eq!(window.title, "Ale Works");

    let destination = window.action.destination;
    let label = window.action.label.clone();
    app.events()
        .push(AppEvent::DirectionsRequested { destination, label });
    app.process_events().await;

    let map = app.map().unwrap();
    assert!(map.route_overlay().is_some());
    assert!(map.markers().is_attached("place-0"));
    assert!(!map.markers().is_attached("place-1"));
}
