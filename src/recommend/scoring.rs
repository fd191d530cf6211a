//! Destination scoring
//!
//! Five independent sub-scores, each in [0, 1], combined into a weighted
//! total. Missing optional data (no origin airport, no travel-time estimate,
//! no behavioral signal) always resolves to a neutral 0.5 rather than a
//! penalty or an error.

use crate::models::{
    BudgetFlexibility, Destination, ScoredDestination, SelectionRequest, TravelerProfile,
};
use crate::recommend::preferences::{NEUTRAL_PREFERENCE, PreferenceModel};
use crate::recommend::travel_time::estimate_travel_time;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Score how well the departure month fits the destination's best months
///
/// 1.0 for a best month, 0.7 for a month adjacent to one (wrapping at the
/// year boundary), 0.3 otherwise.
#[must_use]
pub fn score_seasonal_fit(destination: &Destination, departure_date: NaiveDate) -> f64 {
    let month = departure_date.month();
    if destination.best_months.contains(&month) {
        return 1.0;
    }

    let previous = if month == 1 { 12 } else { month - 1 };
    let next = if month == 12 { 1 } else { month + 1 };
    if destination.best_months.contains(&previous) || destination.best_months.contains(&next) {
        0.7
    } else {
        0.3
    }
}

/// Score the overlap between requested vibes and the destination's vibes
///
/// No requested vibes means no preference, which is never penalized.
#[must_use]
pub fn score_vibe_match(destination: &Destination, requested_vibes: &[String]) -> f64 {
    if requested_vibes.is_empty() {
        return 1.0;
    }

    let available: HashSet<String> = destination
        .vibes
        .iter()
        .map(|vibe| vibe.to_lowercase())
        .collect();
    let matched = requested_vibes
        .iter()
        .filter(|vibe| available.contains(&vibe.to_lowercase()))
        .count();

    matched as f64 / requested_vibes.len() as f64
}

/// Score the destination's average cost against the traveler's budget
#[must_use]
pub fn score_budget_fit(destination: &Destination, profile: &TravelerProfile) -> f64 {
    let cost = destination.average_cost;
    let budget = &profile.budget;

    let Some(max) = budget.max else {
        return 1.0;
    };
    let min = budget.min.unwrap_or(0.0);

    if cost >= min && cost <= max {
        return 1.0;
    }
    if cost > max {
        if cost <= max * 1.2 {
            return match budget.flexibility {
                BudgetFlexibility::SplurgeOk => 0.8,
                BudgetFlexibility::Flexible => 0.5,
                BudgetFlexibility::Strict => 0.2,
            };
        }
        return match budget.flexibility {
            BudgetFlexibility::SplurgeOk => 0.4,
            _ => 0.1,
        };
    }
    if cost < min {
        return 0.7;
    }
    0.5
}

/// Score how convenient the destination is to reach from the origin airport
///
/// Neutral 0.5 when no origin is set or no estimate exists: a traveler
/// without a fixed origin is never penalized for aspirational picks.
#[must_use]
pub fn score_reachability(destination: &Destination, origin_airport: Option<&str>) -> f64 {
    let Some(origin) = origin_airport else {
        return 0.5;
    };
    let Some(estimate) = estimate_travel_time(origin, destination) else {
        return 0.5;
    };

    match estimate.total_hours {
        h if h <= 4.0 => 1.0,
        h if h <= 8.0 => 0.8,
        h if h <= 14.0 => 0.5,
        _ => 0.3,
    }
}

/// Score a destination against the learned preference model
///
/// When the behavioral gate has not passed the scorer is not called at all
/// and a fixed neutral value is used instead.
#[must_use]
pub fn score_revealed_preference(
    destination: &Destination,
    preferences: Option<&dyn PreferenceModel>,
) -> f64 {
    match preferences {
        Some(model) if model.has_enough_signals() => {
            model.score_destination(destination).clamp(0.0, 1.0)
        }
        _ => NEUTRAL_PREFERENCE,
    }
}

/// Component weights for aggregating sub-scores into a total
///
/// Each profile's weights sum to 1.0, so the total stays in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    pub seasonal: f64,
    pub vibe: f64,
    pub budget: f64,
    pub reachability: f64,
    pub revealed: f64,
}

impl WeightProfile {
    /// Select the weight profile for a request
    ///
    /// The learned profiles apply only when the behavioral gate passed,
    /// even if a preference handle was supplied.
    #[must_use]
    pub fn for_request(has_origin: bool, has_signals: bool) -> Self {
        match (has_signals, has_origin) {
            (false, false) => Self {
                seasonal: 0.35,
                vibe: 0.40,
                budget: 0.25,
                reachability: 0.0,
                revealed: 0.0,
            },
            (false, true) => Self {
                seasonal: 0.30,
                vibe: 0.35,
                budget: 0.20,
                reachability: 0.15,
                revealed: 0.0,
            },
            (true, false) => Self {
                seasonal: 0.20,
                vibe: 0.25,
                budget: 0.15,
                reachability: 0.0,
                revealed: 0.40,
            },
            (true, true) => Self {
                seasonal: 0.15,
                vibe: 0.20,
                budget: 0.10,
                reachability: 0.15,
                revealed: 0.40,
            },
        }
    }

    /// Combine component scores into a weighted total
    #[must_use]
    pub fn combine(
        &self,
        seasonal: f64,
        vibe: f64,
        budget: f64,
        reachability: f64,
        revealed: f64,
    ) -> f64 {
        self.seasonal * seasonal
            + self.vibe * vibe
            + self.budget * budget
            + self.reachability * reachability
            + self.revealed * revealed
    }
}

/// Score one destination against a request
#[must_use]
pub fn score_destination(
    destination: &Destination,
    request: &SelectionRequest,
    preferences: Option<&dyn PreferenceModel>,
) -> ScoredDestination {
    let origin = request.profile.home_airport.as_deref();
    let has_signals = preferences.is_some_and(PreferenceModel::has_enough_signals);

    let seasonal_fit = score_seasonal_fit(destination, request.departure_date);
    let vibe_match = score_vibe_match(destination, &request.requested_vibes);
    let budget_fit = score_budget_fit(destination, &request.profile);
    let reachability = score_reachability(destination, origin);
    let revealed_pref = score_revealed_preference(destination, preferences);

    let weights = WeightProfile::for_request(origin.is_some(), has_signals);
    let total_score = weights.combine(seasonal_fit, vibe_match, budget_fit, reachability, revealed_pref);

    ScoredDestination {
        destination: destination.clone(),
        seasonal_fit,
        vibe_match,
        budget_fit,
        reachability,
        revealed_pref,
        total_score,
    }
}
