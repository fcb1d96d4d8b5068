use crate::{core::geo::LatLng, prelude::HashMap};

/// Typed payload of an info window's directions button. The host hands it
/// back verbatim as an
/// [`AppEvent::DirectionsRequested`](crate::input::events::AppEvent) when
/// the button is activated, so no parameters are round-tripped through
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsTarget {
    pub destination: LatLng,
    pub label: String,
}

/// Popup shown when a marker is clicked: the place's name, address, rating,
/// and a directions action. Content is captured when the marker is created.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoWindow {
    pub marker_id: String,
    pub position: LatLng,
    pub title: String,
    pub address: String,
    pub rating: String,
    pub action: DirectionsTarget,
}

impl InfoWindow {
    pub fn new(
        marker_id: String,
        position: LatLng,
        title: String,
        address: String,
        rating: String,
        action: DirectionsTarget,
    ) -> Self {
        Self {
            marker_id,
            position,
            title,
            address,
            rating,
            action,
        }
    }
}

/// Holds one prepared info window per marker and tracks which one is open.
/// Opening a window closes whichever was open before it.
#[derive(Debug, Default)]
pub struct InfoWindowManager {
    windows: HashMap<String, InfoWindow>,
    open: Option<String>,
}

impl InfoWindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, window: InfoWindow) {
        self.windows.insert(window.marker_id.clone(), window);
    }

    /// Opens the window for `marker_id`. Returns false for unknown markers.
    pub fn open(&mut self, marker_id: &str) -> bool {
        if !self.windows.contains_key(marker_id) {
            return false;
        }
        self.open = Some(marker_id.to_string());
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// The currently open window, if any
    pub fn open_window(&self) -> Option<&InfoWindow> {
        self.open.as_deref().and_then(|id| self.windows.get(id))
    }

    pub fn get(&self, marker_id: &str) -> Option<&InfoWindow> {
        self.windows.get(marker_id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
