//! Trip generation orchestration
//!
//! Chains preference extraction with the per-category place-search
//! fan-out and assembles the day-by-day plan.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::Result;
use crate::extractor::PreferenceExtractor;
use crate::models::{ItineraryDay, Place, TripPlan};
use crate::places::{PlaceProvider, PlaceQuery, SortOrder};

/// Results fetched per category search
const RESULTS_PER_CATEGORY: u32 = 5;

/// Orchestrates the extraction, search, and assembly pipeline
pub struct TripPlanner<E, P> {
    extractor: E,
    places: P,
}

impl<E: PreferenceExtractor, P: PlaceProvider> TripPlanner<E, P> {
    /// Create a planner over the given extractor and place backend
    pub fn new(extractor: E, places: P) -> Self {
        Self { extractor, places }
    }

    /// Generate a full trip plan from a free-text request
    ///
    /// Extraction cannot fail (it falls back to a static record); any
    /// failed category search aborts the whole call.
    pub async fn generate_trip(&self, request: &str) -> Result<TripPlan> {
        let extraction = self.extractor.extract(request).await;
        if extraction.is_fallback() {
            info!("Planning from fallback preferences");
        }
        let preferences = extraction.into_preferences();
        info!(
            "Planning {} days in {} across {} categories",
            preferences.duration,
            preferences.location,
            preferences.categories.len()
        );

        let queries: Vec<PlaceQuery> = preferences
            .categories
            .iter()
            .map(|category| PlaceQuery {
                query: category.clone(),
                near: preferences.location.clone(),
                limit: RESULTS_PER_CATEGORY,
                sort: SortOrder::Rating,
            })
            .collect();

        // All-or-nothing join: the first failed search aborts the trip.
        let searches = queries.iter().map(|query| self.places.search(query));
        let category_results = try_join_all(searches).await?;

        let itinerary = build_itinerary(&category_results, preferences.duration);
        debug!("Assembled {} itinerary days", itinerary.len());

        Ok(TripPlan {
            preferences,
            itinerary,
        })
    }
}

/// Round-robin day assembly
///
/// Day index `i` (0-based) takes `results[i % len]` from each non-empty
/// category list; empty lists contribute nothing and are never an error.
fn build_itinerary(category_results: &[Vec<Place>], duration: u32) -> Vec<ItineraryDay> {
    (0..duration)
        .map(|i| ItineraryDay {
            day: i + 1,
            places: category_results
                .iter()
                .filter(|results| !results.is_empty())
                .map(|results| results[i as usize % results.len()].clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn place(name: &str) -> Place {
        Place {
            fsq_place_id: None,
            name: name.to_string(),
            rating: None,
            distance: None,
            location: None,
            categories: Vec::new(),
        }
    }

    fn places(names: &[&str]) -> Vec<Place> {
        names.iter().map(|n| place(n)).collect()
    }

    #[test]
    fn test_round_robin_wraps_per_category() {
        let results = vec![
            places(&["a0", "a1", "a2"]),
            places(&["b0", "b1", "b2", "b3", "b4"]),
        ];

        let itinerary = build_itinerary(&results, 6);
        assert_eq!(itinerary.len(), 6);

        // Day index 4: 4 % 3 = 1 from the first list, 4 % 5 = 4 from the second
        let day5 = &itinerary[4];
        assert_eq!(day5.day, 5);
        assert_eq!(day5.places[0].name, "a1");
        assert_eq!(day5.places[1].name, "b4");

        // Day index 3 wraps the shorter list back to its start
        assert_eq!(itinerary[3].places[0].name, "a0");
    }

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(7, 3)]
    fn test_day_count_matches_duration(#[case] duration: u32, #[case] categories: usize) {
        let results: Vec<Vec<Place>> = (0..categories).map(|_| places(&["x", "y"])).collect();

        let itinerary = build_itinerary(&results, duration);
        assert_eq!(itinerary.len(), duration as usize);
        for (i, day) in itinerary.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
            assert!(day.places.len() <= categories);
        }
    }

    #[test]
    fn test_empty_category_contributes_nothing() {
        let results = vec![places(&["a0"]), Vec::new()];

        let itinerary = build_itinerary(&results, 3);
        for day in &itinerary {
            assert_eq!(day.places.len(), 1);
            assert_eq!(day.places[0].name, "a0");
        }
    }

    #[test]
    fn test_no_categories_yields_empty_days() {
        let itinerary = build_itinerary(&[], 2);
        assert_eq!(itinerary.len(), 2);
        assert!(itinerary.iter().all(|day| day.places.is_empty()));
    }
}
