use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    layers::{marker::MarkerLayer, route::RouteOverlay},
};

/// Handle to the host's map backend. The host hands this to
/// [`crate::App::on_map_ready`] once the backend has finished loading;
/// passing `None` instead signals that the backend is unavailable and the
/// whole flow must be skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSdk {
    /// Pixel size of the surface the map will be drawn into
    pub surface_size: Point,
}

impl MapSdk {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            surface_size: Point::new(width, height),
        }
    }
}

/// Owned map model: the viewport, the marker layer, and at most one route
/// overlay. Rendering is the host's concern; the map only tracks state.
pub struct Map {
    viewport: Viewport,
    markers: MarkerLayer,
    route: Option<RouteOverlay>,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            viewport: Viewport::new(center, zoom, size),
            markers: MarkerLayer::new(),
            route: None,
        }
    }

    /// Builds a map sized to the backend's surface
    pub fn with_sdk(sdk: &MapSdk, center: LatLng, zoom: f64) -> Self {
        Self::new(center, zoom, sdk.surface_size)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn center(&self) -> LatLng {
        self.viewport.center
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    /// Moves the view to a new center and zoom
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut MarkerLayer {
        &mut self.markers
    }

    /// Installs a route overlay, returning the one it replaced. Only one
    /// route is ever present; new overlays overwrite, never accumulate.
    pub fn set_route_overlay(&mut self, overlay: RouteOverlay) -> Option<RouteOverlay> {
        self.route.replace(overlay)
    }

    pub fn clear_route_overlay(&mut self) -> Option<RouteOverlay> {
        self.route.take()
    }

    pub fn route_overlay(&self) -> Option<&RouteOverlay> {
        self.route.as_ref()
    }
}
