//! Driving-directions flow: locate the caller, request a route, draw it.

use crate::{app::App, core::geo::LatLng};

pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported.";
pub const GEOLOCATION_FAILED_MESSAGE: &str = "Geolocation failed. Unable to get directions.";
pub const ROUTING_FAILED_MESSAGE: &str = "Directions request failed. Try again.";

impl App {
    /// Requests driving directions from the caller's current position to
    /// `destination` and renders the route, replacing any route already
    /// shown. Requests are not cancelled once sent: when two overlap, the
    /// one that resolves last wins, even if it was issued first.
    pub async fn get_directions(&mut self, destination: LatLng, label: &str) {
        log::info!("getting directions to {label} ({destination})");

        let Some(context) = self.context.as_mut() else {
            log::error!("map or directions services are not initialized");
            return;
        };

        let Some(geolocator) = self.geolocator.as_ref() else {
            self.alerts.alert(GEOLOCATION_UNSUPPORTED_MESSAGE);
            return;
        };
        let origin = match geolocator.locate().await {
            Ok(origin) => origin,
            Err(err) => {
                log::warn!("geolocation failed: {err}");
                self.alerts.alert(GEOLOCATION_FAILED_MESSAGE);
                return;
            }
        };

        let request = context.directions_builder.build(origin, destination);
        match self.directions.route(&request).await {
            Ok(response) if response.is_usable() => {
                if let Some(route) = response.best_route() {
                    context
                        .directions_renderer
                        .render(&mut context.map, route);
                }
            }
            Ok(response) => {
                log::error!("directions request failed due to {:?}", response.status);
                self.alerts.alert(ROUTING_FAILED_MESSAGE);
            }
            Err(err) => {
                log::error!("directions request failed: {err}");
                self.alerts.alert(ROUTING_FAILED_MESSAGE);
            }
        }
    }
}
