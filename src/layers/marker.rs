use crate::{
    core::{config::MarkerIconConfig, geo::LatLng},
    prelude::{HashMap, HashSet},
};
use serde::{Deserialize, Serialize};

/// Identifier of a marker within its layer
pub type MarkerId = String;

/// Visual asset drawn for a marker, at a fixed pixel size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl MarkerIcon {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

impl From<&MarkerIconConfig> for MarkerIcon {
    fn from(config: &MarkerIconConfig) -> Self {
        Self::new(config.url.clone(), config.width, config.height)
    }
}

/// A pin-like object on the map representing one place
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    title: String,
    icon: MarkerIcon,
}

impl Marker {
    pub fn new(id: MarkerId, position: LatLng, title: String, icon: MarkerIcon) -> Self {
        Self {
            id,
            position,
            title,
            icon,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &MarkerIcon {
        &self.icon
    }
}

/// Owns every marker created on the map and tracks which of them are
/// attached (visible). Detaching hides a marker without destroying it, so a
/// later attach restores the same marker; visibility is toggled, never
/// duplicated.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: HashMap<MarkerId, Marker>,
    attached: HashSet<MarkerId>,
    /// Creation order, preserved for hosts that render markers in sequence
    order: Vec<MarkerId>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker and attaches it. Re-adding an id replaces the marker
    /// in place without duplicating it.
    pub fn add(&mut self, marker: Marker) {
        let id = marker.id().to_string();
        if self.markers.insert(id.clone(), marker).is_none() {
            self.order.push(id.clone());
        }
        self.attached.insert(id);
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.markers.contains_key(id)
    }

    /// Makes a marker visible. Returns false for unknown ids.
    pub fn attach(&mut self, id: &str) -> bool {
        if !self.markers.contains_key(id) {
            return false;
        }
        self.attached.insert(id.to_string());
        true
    }

    /// Hides a marker without destroying it. Returns false for unknown ids.
    pub fn detach(&mut self, id: &str) -> bool {
        if !self.markers.contains_key(id) {
            return false;
        }
        self.attached.remove(id);
        true
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.attached.contains(id)
    }

    /// All markers in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.order.iter().filter_map(|id| self.markers.get(id))
    }

    /// Attached markers in creation order
    pub fn iter_attached(&self) -> impl Iterator<Item = &Marker> {
        self.order
            .iter()
            .filter(|id| self.attached.contains(*id))
            .filter_map(|id| self.markers.get(id))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}
