//! Text search against the external places provider.

pub mod source;

pub use source::{HttpPlacesSource, PlacesSource};

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Shown in info windows and the featured panel when a place has no rating
pub const RATING_UNAVAILABLE: &str = "Not available";

/// A text query scoped to a radius around a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSearchRequest {
    pub query: String,
    pub location: LatLng,
    pub radius_m: u32,
}

/// Status field of a places response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResults,
    RequestDenied,
    InvalidRequest,
    /// Any status this crate doesn't know about
    #[serde(other)]
    Error,
}

/// One point of interest returned by the provider. Lives only as long as
/// the call that received it; callers copy out what they keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub location: LatLng,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl PlaceResult {
    /// Rating formatted for display, with a fallback for unrated places
    pub fn rating_text(&self) -> String {
        match self.rating {
            Some(rating) => format!("{rating:.1}"),
            None => RATING_UNAVAILABLE.to_string(),
        }
    }
}

/// Full response to a text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSearchResponse {
    pub status: SearchStatus,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl TextSearchResponse {
    /// True when the provider answered OK with at least one result
    pub fn is_usable(&self) -> bool {
        self.status == SearchStatus::Ok && !self.results.is_empty()
    }
}
