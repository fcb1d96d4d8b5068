use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// World size in pixels at the current zoom level
    pub fn scale(&self) -> f64 {
        256.0 * 2_f64.powf(self.zoom)
    }

    /// Projects a coordinate to world pixel space at the current zoom
    /// (Web Mercator, EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng) -> Point {
        let scale = self.scale();
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();

        let x = (lat_lng.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * scale;

        Point::new(x, y)
    }

    /// Inverse of [`Viewport::project`]
    pub fn unproject(&self, point: &Point) -> LatLng {
        let scale = self.scale();
        let lng = point.x / scale * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * point.y / scale)).sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a coordinate to screen pixels relative to the viewport's
    /// top-left corner. Used to place info windows over markers.
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let world = self.project(lat_lng);
        let origin = self.project(&self.center);
        world.subtract(&origin).add(&self.size.multiply(0.5))
    }

    /// Converts screen pixels back to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center);
        let world = origin.add(&pixel.subtract(&self.size.multiply(0.5)));
        self.unproject(&world)
    }

    /// The geographical bounds currently visible in the viewport
    pub fn bounds(&self) -> LatLngBounds {
        let south_west = self.pixel_to_lat_lng(&Point::new(0.0, self.size.y));
        let north_east = self.pixel_to_lat_lng(&Point::new(self.size.x, 0.0));
        LatLngBounds::new(south_west, north_east)
    }
}
