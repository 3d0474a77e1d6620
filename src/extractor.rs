//! Preference extraction via a generative-language model
//!
//! Converts a free-text trip request into [`TripPreferences`]. This
//! component never fails outwardly: every transport, HTTP, or parse
//! problem is absorbed and replaced by the static fallback record, so the
//! pipeline always has preferences to work with.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TripAiError};
use crate::models::TripPreferences;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Outcome of a preference extraction
///
/// `Fallback` means the request could not be turned into a valid
/// preference record; it always carries [`TripPreferences::fallback`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Extracted(TripPreferences),
    Fallback(TripPreferences),
}

impl Extraction {
    /// Unwrap into the preference record, whichever way it was produced
    #[must_use]
    pub fn into_preferences(self) -> TripPreferences {
        match self {
            Self::Extracted(prefs) | Self::Fallback(prefs) => prefs,
        }
    }

    /// True when extraction fell back to the static record
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Source of trip preferences
#[async_trait]
pub trait PreferenceExtractor: Send + Sync {
    /// Extract preferences from a free-text request; never errors
    async fn extract(&self, request: &str) -> Extraction;
}

/// Preference extractor backed by the Gemini `generateContent` endpoint
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiExtractor {
    /// Create a new extractor with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the model id (default: gemini-2.0-flash)
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base URL (for proxies and tests)
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn try_extract(&self, request: &str) -> Result<TripPreferences> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TripAiError::Network(format!("Generative API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TripAiError::Api(format!(
                "Generative API error {status}: {error_text}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            TripAiError::Parse(format!("Failed to parse generateContent response: {e}"))
        })?;

        let text = body.first_text().ok_or_else(|| {
            TripAiError::Parse("No text candidate in generateContent response".to_string())
        })?;

        parse_preferences(text)
    }
}

#[async_trait]
impl PreferenceExtractor for GeminiExtractor {
    async fn extract(&self, request: &str) -> Extraction {
        match self.try_extract(request).await {
            Ok(preferences) => {
                debug!("Extracted preferences: {:?}", preferences);
                Extraction::Extracted(preferences)
            }
            Err(e) => {
                warn!("Preference extraction failed, using fallback: {e}");
                Extraction::Fallback(TripPreferences::fallback())
            }
        }
    }
}

/// Build the instruction prompt embedding the user request
fn build_prompt(request: &str) -> String {
    format!(
        r#"Extract travel preferences from the following request.

Request: "{request}"

Respond with only a JSON object of this exact shape:
{{"categories": ["food", "culture"], "location": "city name", "duration": 3, "pace": "low|medium|high", "budget": "low|medium|high"}}

Categories are venue search topics. Duration is the number of days."#
    )
}

/// Parse model output into a preference record
///
/// Model output often wraps the object in a ```json fence and hard-wraps
/// long lines; both are stripped before slicing out the object between
/// the first `{` and the last `}`. A shape mismatch is a parse error (the
/// caller turns it into a fallback), never a panic.
fn parse_preferences(text: &str) -> Result<TripPreferences> {
    let cleaned = text
        .replace("```json", "")
        .replace("```", "")
        .replace('\n', "");

    let start = cleaned
        .find('{')
        .ok_or_else(|| TripAiError::Parse("No '{' in model output".to_string()))?;
    let end = cleaned
        .rfind('}')
        .ok_or_else(|| TripAiError::Parse("No '}' in model output".to_string()))?;
    if end < start {
        return Err(TripAiError::Parse(
            "Braces out of order in model output".to_string(),
        ));
    }

    serde_json::from_str(&cleaned[start..=end]).map_err(|e| {
        TripAiError::Parse(format!("Model output does not match the preference shape: {e}"))
    })
}

// Gemini generateContent wire structures

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// First top-level text content, when the model produced any
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::models::{Budget, Pace};

    #[test]
    fn test_parse_fenced_object() {
        let text = "```json\n{\"categories\":[\"a\"],\n\"location\":\"X\",\n\"duration\":1,\"pace\":\"low\",\"budget\":\"low\"}\n```";
        let prefs = parse_preferences(text).unwrap();
        assert_eq!(prefs.categories, vec!["a"]);
        assert_eq!(prefs.location, "X");
        assert_eq!(prefs.duration, 1);
        assert_eq!(prefs.pace, Pace::Low);
        assert_eq!(prefs.budget, Budget::Low);
    }

    #[test]
    fn test_parse_object_with_surrounding_prose() {
        let text = "Here you go:\n{\"categories\":[\"food\"],\"location\":\"Lisbon\",\"duration\":2,\"pace\":\"medium\",\"budget\":\"high\"}\nEnjoy!";
        let prefs = parse_preferences(text).unwrap();
        assert_eq!(prefs.location, "Lisbon");
        assert_eq!(prefs.duration, 2);
    }

    #[rstest]
    #[case::no_braces("the model refused to answer")]
    #[case::truncated("{\"categories\":[\"a\"],\"location\":\"X\"")]
    #[case::missing_fields("{\"categories\":[\"a\"]}")]
    #[case::bad_enum(
        "{\"categories\":[\"a\"],\"location\":\"X\",\"duration\":1,\"pace\":\"frantic\",\"budget\":\"low\"}"
    )]
    #[case::braces_reversed("} nothing here {")]
    fn test_parse_rejects_malformed_output(#[case] text: &str) {
        assert!(parse_preferences(text).is_err());
    }

    #[test]
    fn test_build_prompt_embeds_request() {
        let prompt = build_prompt("a week of food in Tokyo");
        assert!(prompt.contains("a week of food in Tokyo"));
        assert!(prompt.contains("\"categories\""));
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("hello"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_extraction_outcome_accessors() {
        let extracted = Extraction::Extracted(TripPreferences::fallback());
        assert!(!extracted.is_fallback());

        let fallback = Extraction::Fallback(TripPreferences::fallback());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_preferences(), TripPreferences::fallback());
    }

    #[tokio::test]
    async fn test_extract_falls_back_on_dead_endpoint() {
        let extractor = GeminiExtractor::new("test-key").with_base_url("http://127.0.0.1:9");
        let outcome = extractor.extract("two days of food in Lisbon").await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_preferences(), TripPreferences::fallback());
    }
}
