//! Trip preference model produced by the preference extractor

use serde::{Deserialize, Serialize};

/// Travel pace requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Low,
    Medium,
    High,
}

/// Budget level requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

/// Structured trip preferences
///
/// Produced once by the extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPreferences {
    /// Search topics, one place search per entry (e.g. "food")
    pub categories: Vec<String>,
    /// Destination place name
    pub location: String,
    /// Trip length in days
    pub duration: u32,
    /// Travel pace
    pub pace: Pace,
    /// Budget level
    pub budget: Budget,
}

impl TripPreferences {
    /// Static substitute returned whenever extraction fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            categories: vec![
                "food".to_string(),
                "culture".to_string(),
                "nature".to_string(),
            ],
            location: "Montreal".to_string(),
            duration: 3,
            pace: Pace::High,
            budget: Budget::High,
        }
    }
}
