//! `TripAI` - AI-assisted trip itinerary planning
//!
//! This library turns a free-text trip request into a structured
//! day-by-day itinerary by chaining a generative-language API (preference
//! extraction) with a places-search API (venue lookup).

pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod places;
pub mod planner;

// Re-export core types for public API
pub use config::TripAiConfig;
pub use error::{Result, TripAiError};
pub use extractor::{Extraction, GeminiExtractor, PreferenceExtractor};
pub use models::{Budget, ItineraryDay, Pace, Place, TripPlan, TripPreferences};
pub use places::{FoursquareClient, PlaceProvider, PlaceQuery, SortOrder};
pub use planner::TripPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
