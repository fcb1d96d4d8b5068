//! Live substring filtering of markers against the registry.

use crate::app::App;

impl App {
    /// Re-evaluates every marker's visibility for the given raw input
    /// term: a marker stays attached when its lowercased name or any of
    /// its categories contains the lowercased term. The empty term matches
    /// everything, so clearing the input restores all markers. Repeated
    /// calls are idempotent.
    pub fn apply_filter(&mut self, term: &str) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        let term = term.to_lowercase();
        for entry in self.registry.iter() {
            if entry.matches(&term) {
                context.map.markers_mut().attach(&entry.marker_id);
            } else {
                context.map.markers_mut().detach(&entry.marker_id);
            }
        }

        log::debug!("filter term entered: {term:?}");
    }
}
