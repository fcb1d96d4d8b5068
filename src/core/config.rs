//! Configuration for the application: map view, search parameters, featured
//! panel, marker icon, and provider endpoints.
//!
//! Defaults reproduce the original deployment: a Central Florida map at zoom
//! 10, a "brewery" text search with a 50 km radius, and a top-5 featured
//! panel.

use crate::core::geo::{LatLng, Point};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub search: SearchConfig,
    pub featured: FeaturedConfig,
    pub marker_icon: MarkerIconConfig,
    pub providers: ProviderEndpoints,
}

impl AppConfig {
    /// Loads a configuration from a JSON document. Missing sections fall
    /// back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub surface_size: Point,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(28.5383, -81.3792),
            zoom: 10.0,
            surface_size: Point::new(1024.0, 768.0),
        }
    }
}

/// Text search issued by both the marker search and the featured panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub query: String,
    pub radius_m: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query: "brewery".to_string(),
            radius_m: 50_000,
        }
    }
}

/// Featured panel sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedConfig {
    /// Number of top-rated results shown
    pub limit: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self { limit: 5 }
    }
}

/// Icon used for every search-result marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIconConfig {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/billjf/CentralFloridaBreweries/main/images/beermug.png"
                .to_string(),
            width: 40,
            height: 40,
        }
    }
}

/// Endpoints of the three external providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderEndpoints {
    pub places_url: String,
    pub directions_url: String,
    pub geolocation_url: String,
    pub api_key: Option<String>,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            places_url: "https://places.example.com/textsearch".to_string(),
            directions_url: "https://routes.example.com/directions".to_string(),
            geolocation_url: "https://locate.example.com/position".to_string(),
            api_key: None,
        }
    }
}
