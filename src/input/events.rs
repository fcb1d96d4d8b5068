use crate::core::{geo::LatLng, map::MapSdk};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Events delivered by the host. Parameters are carried as typed values
/// rather than re-parsed strings, so a click handler hands the directions
/// flow its coordinate and label directly.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The map backend finished loading (or failed to, with `None`)
    MapReady { sdk: Option<MapSdk> },
    /// A marker was clicked
    MarkerClicked { marker_id: String },
    /// An info window's directions action was activated
    DirectionsRequested { destination: LatLng, label: String },
    /// The filter input's value changed
    FilterChanged { term: String },
}

/// Unbounded queue between the host and the application. The host pushes
/// from wherever its callbacks fire; the application drains one event at a
/// time.
pub struct EventQueue {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// A cloneable sender for host callbacks
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn push(&self, event: AppEvent) {
        // The receiver lives as long as the queue, so this cannot fail
        let _ = self.tx.send(event);
    }

    /// Removes and returns every queued event in arrival order
    pub fn drain(&self) -> Vec<AppEvent> {
        self.rx.try_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
