pub mod alert;
pub mod info;
pub mod panel;

pub use alert::{AlertSink, LogAlertSink};
pub use info::{DirectionsTarget, InfoWindow, InfoWindowManager};
pub use panel::{Panel, PanelBlock, PanelContent};
