use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;
use tripscout::models::{BudgetFlexibility, BudgetRange, SelectionRequest, TravelerProfile};
use tripscout::recommend::{RecommendationEngine, calculate_diversity_score, estimate_travel_time};
use tripscout::{DestinationCatalog, TripScoutConfig};

fn main() -> Result<()> {
    let config = TripScoutConfig::load().context("Failed to load configuration")?;
    init_logging(&config);

    let catalog = match &config.catalog.path {
        Some(path) => DestinationCatalog::load_from_path(path)?,
        None => DestinationCatalog::builtin(),
    };
    let engine = RecommendationEngine::new(catalog);

    // Optional origin airport from the command line, e.g. `tripscout JFK`
    let home_airport = std::env::args().nth(1).map(|code| code.to_uppercase());

    let mut profile = TravelerProfile::new(home_airport.clone());
    profile.budget = BudgetRange::new(800.0, 2000.0, BudgetFlexibility::Flexible);
    profile.surprise_tolerance = config.defaults.surprise_tolerance;

    let departure = Utc::now().date_naive() + Duration::days(45);
    let mut request = SelectionRequest::new(profile, departure, config.defaults.result_count);
    request.requested_vibes = vec!["food".to_string(), "culture".to_string()];

    let scored = engine.scored_candidates(&request, None);
    let results = engine.select_destinations(&request, None);

    println!(
        "Top {} destinations departing {}:",
        results.len(),
        departure
    );
    for (rank, destination) in results.iter().enumerate() {
        let travel = home_airport
            .as_deref()
            .and_then(|origin| estimate_travel_time(origin, destination))
            .map_or_else(
                || "travel time unknown".to_string(),
                |estimate| format!("{:.1}h away", estimate.total_hours),
            );
        let scores = scored
            .iter()
            .find(|s| s.destination.id == destination.id)
            .map(|s| s.format_scores())
            .unwrap_or_default();

        println!(
            "  {}. {}, {} ({travel}) - {scores}",
            rank + 1,
            destination.city,
            destination.country
        );
    }

    println!(
        "Result diversity score: {:.2}",
        calculate_diversity_score(&results)
    );

    Ok(())
}

fn init_logging(config: &TripScoutConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
