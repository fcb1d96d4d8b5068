//! Featured list: the top-rated results rendered into a side panel.

use crate::{
    core::{config::AppConfig, geo::LatLng},
    places::{source::PlacesSource, TextSearchRequest},
    ui::panel::{Panel, PanelBlock},
};
use std::cmp::Ordering;

/// Fallback shown when the featured search fails or returns nothing
pub const NO_RESULTS_MESSAGE: &str = "No breweries found. Try again later.";

/// Queries the places provider independently of the marker search and
/// replaces the panel content with the top-rated results, or with the
/// fallback message on any failure.
pub(crate) async fn fetch_featured(
    config: &AppConfig,
    places: &dyn PlacesSource,
    center: LatLng,
    panel: &mut Panel,
) {
    log::info!("fetching featured places...");

    let request = TextSearchRequest {
        query: config.search.query.clone(),
        location: center,
        radius_m: config.search.radius_m,
    };

    let response = match places.text_search(&request).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("featured search failed: {err}");
            panel.set_message(NO_RESULTS_MESSAGE);
            return;
        }
    };
    if !response.is_usable() {
        log::error!("no featured places found ({:?})", response.status);
        panel.set_message(NO_RESULTS_MESSAGE);
        return;
    }

    let mut results = response.results;
    // Missing ratings sort as 0, i.e. last
    results.sort_by(|a, b| {
        let rating_b = b.rating.unwrap_or(0.0);
        let rating_a = a.rating.unwrap_or(0.0);
        rating_b.partial_cmp(&rating_a).unwrap_or(Ordering::Equal)
    });
    results.truncate(config.featured.limit);

    let loaded: Vec<String> = results
        .iter()
        .map(|place| format!("{} ({})", place.name, place.rating_text()))
        .collect();
    log::info!("featured places loaded: {}", loaded.join(", "));

    panel.set_blocks(
        results
            .iter()
            .map(|place| PanelBlock {
                title: place.name.clone(),
                rating: place.rating_text(),
                address: place.address.clone(),
            })
            .collect(),
    );
}
