use async_trait::async_trait;
use brewmap::{
    app::App,
    core::{config::AppConfig, geo::LatLng, map::MapSdk},
    directions::{
        source::DirectionsSource, Route, RouteRequest, RouteResponse, RouteStatus,
    },
    geolocate::FixedGeolocator,
    input::events::AppEvent,
    places::{
        source::PlacesSource, PlaceResult, SearchStatus, TextSearchRequest, TextSearchResponse,
    },
    ui::panel::PanelContent,
};
use std::sync::Arc;

/// In-memory places provider with a handful of Central Florida breweries
struct CannedPlaces;

#[async_trait]
impl PlacesSource for CannedPlaces {
    async fn text_search(
        &self,
        _request: &TextSearchRequest,
    ) -> brewmap::Result<TextSearchResponse> {
        let place = |name: &str, address: &str, rating: Option<f64>, lat: f64, lng: f64| {
            PlaceResult {
                name: name.to_string(),
                address: address.to_string(),
                rating,
                location: LatLng::new(lat, lng),
                categories: vec!["brewery".to_string(), "bar".to_string()],
            }
        };

        Ok(TextSearchResponse {
            status: SearchStatus::Ok,
            results: vec![
                place("Hop House", "123 Main St, Orlando, FL", Some(4.5), 28.54, -81.38),
                place("Ale Works", "456 Oak Ave, Orlando, FL", None, 28.55, -81.37),
                place("Barrel & Vine", "789 Pine Rd, Winter Park, FL", Some(4.8), 28.60, -81.35),
                place("Coppertail Station", "12 Lake View Dr, Sanford, FL", Some(4.1), 28.80, -81.27),
                place("Swamp Fox Brewing", "34 River Bend Ct, Kissimmee, FL", Some(3.9), 28.29, -81.41),
                place("Citrus Grove Taproom", "56 Orange Blossom Trl, Orlando, FL", Some(4.6), 28.51, -81.42),
            ],
            error_message: None,
        })
    }
}

/// Directions provider that answers with a straight-line route
struct StraightLineDirections;

#[async_trait]
impl DirectionsSource for StraightLineDirections {
    async fn route(&self, request: &RouteRequest) -> brewmap::Result<RouteResponse> {
        Ok(RouteResponse {
            status: RouteStatus::Ok,
            routes: vec![Route {
                summary: "Demo route".to_string(),
                distance_meters: request.origin.distance_to(&request.destination) as u64,
                duration_seconds: 900,
                path: vec![request.origin, request.destination],
            }],
            error_message: None,
        })
    }
}

/// Walks the whole flow without any UI: bootstrap, both searches, a marker
/// click, a directions request, and live filtering.
#[tokio::main]
async fn main() -> brewmap::Result<()> {
    env_logger::init();

    println!("🗺️ Brewmap Headless Demo");
    println!("========================");

    let mut app = App::new(
        AppConfig::default(),
        Arc::new(CannedPlaces),
        Arc::new(StraightLineDirections),
    )
    .with_geolocator(Arc::new(FixedGeolocator::new(LatLng::new(
        28.4813, -81.5090,
    ))));

    // The host signals that the map backend is ready
    app.events().push(AppEvent::MapReady {
        sdk: Some(MapSdk::new(1024.0, 768.0)),
    });
    app.process_events().await;

    let map = app.map().expect("bootstrap installed the map");
    println!("✅ Map ready:");
    println!("   Center: {}", map.center());
    println!("   Zoom: {}", map.zoom());
    println!("   Markers: {}", map.markers().len());

    println!("\n⭐ Featured breweries:");
    match app.featured_panel().content() {
        PanelContent::Blocks(blocks) => {
            for block in blocks {
                println!("   {} — {} — {}", block.title, block.rating, block.address);
            }
        }
        PanelContent::Message(message) => println!("   {message}"),
        PanelContent::Empty => println!("   (empty)"),
    }

    // Click the first marker and read its info window
    println!("\n📍 Clicking the first marker:");
    app.events().push(AppEvent::MarkerClicked {
        marker_id: "place-0".to_string(),
    });
    app.process_events().await;

    let window = app
        .info_windows()
        .open_window()
        .expect("click opened a window")
        .clone();
    println!("   {} — rating {}", window.title, window.rating);
    println!("   {}", window.address);

    // Activate the info window's directions action
    println!("\n🚗 Getting directions:");
    app.events().push(AppEvent::DirectionsRequested {
        destination: window.action.destination,
        label: window.action.label.clone(),
    });
    app.process_events().await;

    let route = app
        .map()
        .and_then(|map| map.route_overlay())
        .expect("route rendered");
    println!("   Route {:?} with {} points", route.summary(), route.path().len());

    // Live filtering
    println!("\n🔍 Filtering for \"ale\":");
    app.events().push(AppEvent::FilterChanged {
        term: "ale".to_string(),
    });
    app.process_events().await;

    let map = app.map().expect("map still present");
    for marker in map.markers().iter() {
        let state = if map.markers().is_attached(marker.id()) {
            "shown"
        } else {
            "hidden"
        };
        println!("   {:<24} {}", marker.title(), state);
    }

    println!("\n🔍 Clearing the filter restores everything:");
    app.events().push(AppEvent::FilterChanged {
        term: String::new(),
    });
    app.process_events().await;

    let map = app.map().expect("map still present");
    println!(
        "   {} of {} markers attached",
        map.markers().attached_count(),
        map.markers().len()
    );

    println!("\n✅ Demo completed");
    Ok(())
}
