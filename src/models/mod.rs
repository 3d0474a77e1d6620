//! Data models for the TripAI application
//!
//! This module contains the core domain models organized by concern:
//! - Preferences: structured trip preferences extracted from free text
//! - Place: venue records returned by the places-search provider
//! - Itinerary: the assembled day-by-day trip plan

pub mod itinerary;
pub mod place;
pub mod preferences;

// Re-export all public types for convenient access
pub use itinerary::{ItineraryDay, TripPlan};
pub use place::{Place, PlaceCategory, PlaceLocation};
pub use preferences::{Budget, Pace, TripPreferences};
