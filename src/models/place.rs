//! Venue records returned by the places-search provider
//!
//! The record structure is owned by the external API; everything beyond
//! the name is optional and tolerated missing.

use serde::{Deserialize, Serialize};

/// A single venue returned by a place search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned place id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fsq_place_id: Option<String>,
    /// Venue name
    pub name: String,
    /// Provider rating, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Distance from the search center in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    /// Address block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceLocation>,
    /// Venue categories
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<PlaceCategory>,
}

/// Address block of a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A category tag attached to a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCategory {
    pub name: String,
}
