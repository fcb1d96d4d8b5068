use crate::{
    core::map::Map,
    directions::Route,
    layers::route::{RouteOverlay, StrokeStyle},
};

/// Draws computed routes onto a map. Only one route is visible at a time:
/// rendering a new route replaces the current overlay. In-flight requests
/// are never cancelled, so a slow response arriving late will still replace
/// whatever route is shown.
#[derive(Debug, Clone)]
pub struct DirectionsRenderer {
    style: StrokeStyle,
    rendered: u64,
}

impl DirectionsRenderer {
    pub fn new() -> Self {
        Self {
            style: StrokeStyle::default(),
            rendered: 0,
        }
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self { style, rendered: 0 }
    }

    /// Renders `route` on the map, replacing any previous route
    pub fn render(&mut self, map: &mut Map, route: &Route) {
        let overlay =
            RouteOverlay::new(route.path.clone(), route.summary.clone()).with_style(self.style);
        if map.set_route_overlay(overlay).is_some() {
            log::debug!("replaced previously rendered route");
        }
        self.rendered += 1;
    }

    /// Removes the current route from the map, if any
    pub fn clear(&mut self, map: &mut Map) {
        map.clear_route_overlay();
    }

    /// Number of routes rendered so far
    pub fn rendered_count(&self) -> u64 {
        self.rendered
    }
}

impl Default for DirectionsRenderer {
    fn default() -> Self {
        Self::new()
    }
}
