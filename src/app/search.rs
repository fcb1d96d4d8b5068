//! Brewery search: one marker, one info window, and one registry entry per
//! result.

use crate::{
    app::registry::{MarkerEntry, MarkerRegistry},
    core::{config::AppConfig, map::Map},
    layers::marker::{Marker, MarkerIcon},
    places::{source::PlacesSource, TextSearchRequest},
    ui::info::{DirectionsTarget, InfoWindow, InfoWindowManager},
};

/// Queries the places provider around the map center and installs one
/// marker per result. Failures and empty responses leave the registry and
/// the marker layer untouched. Returns the number of markers added.
pub(crate) async fn find_breweries(
    config: &AppConfig,
    places: &dyn PlacesSource,
    map: &mut Map,
    registry: &mut MarkerRegistry,
    info_windows: &mut InfoWindowManager,
) -> usize {
    log::info!("starting place search for {:?}", config.search.query);

    let request = TextSearchRequest {
        query: config.search.query.clone(),
        location: map.center(),
        radius_m: config.search.radius_m,
    };

    let response = match places.text_search(&request).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("place search failed: {err}");
            return 0;
        }
    };
    if !response.is_usable() {
        log::error!("no places found ({:?})", response.status);
        return 0;
    }

    log::info!("found {} places", response.results.len());

    let icon = MarkerIcon::from(&config.marker_icon);
    let mut added = 0;
    for place in &response.results {
        // Ids keep counting across searches so a re-query cannot collide
        let marker_id = format!("place-{}", registry.len());

        map.markers_mut().add(Marker::new(
            marker_id.clone(),
            place.location,
            place.name.clone(),
            icon.clone(),
        ));

        info_windows.insert(InfoWindow::new(
            marker_id.clone(),
            place.location,
            place.name.clone(),
            place.address.clone(),
            place.rating_text(),
            DirectionsTarget {
                destination: place.location,
                label: place.name.clone(),
            },
        ));

        registry.push(MarkerEntry::new(
            marker_id,
            &place.name,
            place.categories.clone(),
        ));
        added += 1;
    }

    added
}
