use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Stroke used to draw a route polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// RGBA color
    pub color: [u8; 4],
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [66, 133, 244, 255],
            width: 4.0,
        }
    }
}

/// Polyline overlay for a computed route. A map holds at most one of these
/// at a time; see [`crate::core::map::Map::set_route_overlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    path: Vec<LatLng>,
    style: StrokeStyle,
    summary: String,
}

impl RouteOverlay {
    pub fn new(path: Vec<LatLng>, summary: String) -> Self {
        Self {
            path,
            style: StrokeStyle::default(),
            summary,
        }
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn path(&self) -> &[LatLng] {
        &self.path
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Bounding box of the polyline, or `None` for an empty path
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let first = self.path.first()?;
        let mut bounds = LatLngBounds::new(*first, *first);
        for point in &self.path[1..] {
            bounds.extend(point);
        }
        Some(bounds)
    }
}
