use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripai::{FoursquareClient, GeminiExtractor, TripAiConfig, TripPlanner};

/// Example request executed on startup
const EXAMPLE_REQUEST: &str = "I want to visit Montreal for 3 days. I love food and culture, \
     and I'd like some time in nature. High pace, high budget.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TripAiConfig::from_env()?;

    let extractor = GeminiExtractor::new(config.gemini_api_key);
    let places = FoursquareClient::new(config.foursquare_api_key);
    let planner = TripPlanner::new(extractor, places);

    let plan = planner.generate_trip(EXAMPLE_REQUEST).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
