//! Day-by-day itinerary assembled from preferences and place data

use serde::{Deserialize, Serialize};

use super::{Place, TripPreferences};

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    /// At most one place per requested category; categories whose search
    /// came back empty are omitted
    pub places: Vec<Place>,
}

/// A complete trip plan: extracted preferences plus the per-day schedule
///
/// The itinerary always has exactly `preferences.duration` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub preferences: TripPreferences,
    pub itinerary: Vec<ItineraryDay>,
}
