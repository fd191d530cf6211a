//! Recommendation engine
//!
//! Orchestrates one selection request: filter the catalog down to eligible
//! candidates, score each one, sort, then hand the list to the diversity
//! selector (or the discovery interleaver when behavioral signal exists).
//! Each call is independent, synchronous, and touches only request-scoped
//! state, so concurrent requests need no coordination.

use crate::catalog::DestinationCatalog;
use crate::models::{Destination, ScoredDestination, SelectionRequest};
use crate::recommend::discovery::interleave_with_discovery;
use crate::recommend::preferences::PreferenceModel;
use crate::recommend::scoring::score_destination;
use crate::recommend::selection::select_diverse;
use rand::rand_core::RngCore;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Destination recommendation engine over a static catalog
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: DestinationCatalog,
}

impl RecommendationEngine {
    /// Create an engine over a loaded catalog
    #[must_use]
    pub fn new(catalog: DestinationCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine selects from
    #[must_use]
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// Select destinations for a request using the production random source
    #[must_use]
    pub fn select_destinations(
        &self,
        request: &SelectionRequest,
        preferences: Option<&dyn PreferenceModel>,
    ) -> Vec<Destination> {
        let mut rng = rand::rng();
        self.select_destinations_with_rng(request, preferences, &mut rng)
    }

    /// Select destinations with an injected random source
    ///
    /// Deterministic given deterministic inputs, which makes the discovery
    /// shuffle reproducible under test.
    #[must_use]
    pub fn select_destinations_with_rng<R: RngCore>(
        &self,
        request: &SelectionRequest,
        preferences: Option<&dyn PreferenceModel>,
        rng: &mut R,
    ) -> Vec<Destination> {
        if request.count == 0 {
            return Vec::new();
        }

        let scored = self.scored_candidates(request, preferences);
        if scored.is_empty() {
            info!("No eligible destinations after filtering");
            return Vec::new();
        }

        let has_signals = preferences.is_some_and(PreferenceModel::has_enough_signals);
        debug!(
            "Behavioral gate {} for {} candidates",
            if has_signals { "passed" } else { "not passed" },
            scored.len()
        );

        let tolerance = request.profile.surprise_tolerance;
        let mut selected = if has_signals {
            interleave_with_discovery(&scored, request.count, tolerance, rng)
        } else {
            select_diverse(&scored, request.count, tolerance)
        };

        // The discovery pool can run dry; top up from the score order so the
        // result only falls short when the candidates do.
        if selected.len() < request.count {
            for candidate in &scored {
                if selected.len() >= request.count {
                    break;
                }
                if selected
                    .iter()
                    .any(|s| s.destination.id == candidate.destination.id)
                {
                    continue;
                }
                selected.push(candidate.clone());
            }
        }

        info!(
            "Selected {} of {} requested destinations",
            selected.len(),
            request.count
        );

        selected.into_iter().map(|s| s.destination).collect()
    }

    /// Score every eligible candidate, sorted descending by total score
    #[must_use]
    pub fn scored_candidates(
        &self,
        request: &SelectionRequest,
        preferences: Option<&dyn PreferenceModel>,
    ) -> Vec<ScoredDestination> {
        let eligible = self.eligible_candidates(request);
        debug!(
            "{} of {} catalog destinations eligible",
            eligible.len(),
            self.catalog.len()
        );

        let mut scored: Vec<ScoredDestination> = eligible
            .into_iter()
            .map(|destination| score_destination(destination, request, preferences))
            .collect();
        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });
        scored
    }

    /// Filter the catalog down to candidates eligible for this request
    fn eligible_candidates(&self, request: &SelectionRequest) -> Vec<&Destination> {
        let home_airport = request.profile.home_airport.as_deref();

        self.catalog
            .destinations()
            .iter()
            .filter(|destination| {
                home_airport
                    .is_none_or(|home| !destination.airport_code.eq_ignore_ascii_case(home))
            })
            .filter(|destination| {
                !request
                    .exclude_destinations
                    .iter()
                    .any(|excluded| excluded.eq_ignore_ascii_case(&destination.city))
            })
            .filter(|destination| {
                request
                    .region_filter
                    .as_deref()
                    .is_none_or(|region| destination.region.eq_ignore_ascii_case(region))
            })
            .collect()
    }
}
