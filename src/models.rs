//! Data models for destinations, traveler profiles, and selection requests
//!
//! This module contains the data structures shared across the recommendation
//! engine: the static catalog entry type, the per-request traveler inputs,
//! and the transient scored candidate produced during selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A destination entry from the static catalog
///
/// Loaded once at process start and never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    /// Stable catalog identifier (e.g. "lisbon")
    pub id: String,
    /// City name shown to the traveler
    pub city: String,
    /// Country name
    pub country: String,
    /// Coarse region tag (e.g. "southern_europe")
    pub region: String,
    /// Character tags used for interest matching (lowercase)
    pub vibes: Vec<String>,
    /// Months (1-12) when the destination is at its best
    pub best_months: Vec<u32>,
    /// Average total cost in USD for a one-week trip
    pub average_cost: f64,
    /// Arrival airport IATA code
    pub airport_code: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Ranked highlight descriptions
    pub highlights: Vec<String>,
}

/// How strictly a traveler treats their budget ceiling
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFlexibility {
    /// The maximum is a hard limit
    Strict,
    /// Willing to stretch a little for the right trip
    #[default]
    Flexible,
    /// Happy to overspend for something special
    SplurgeOk,
}

/// Traveler budget range for a trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BudgetRange {
    /// Minimum spend, if the traveler wants to avoid too-cheap trips
    pub min: Option<f64>,
    /// Maximum spend; absent means no budget constraint
    pub max: Option<f64>,
    /// Currency code for min/max
    #[serde(default = "default_currency")]
    pub currency: String,
    /// How the maximum should be interpreted
    #[serde(default)]
    pub flexibility: BudgetFlexibility,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl BudgetRange {
    /// A budget with no constraints at all
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            min: None,
            max: None,
            currency: default_currency(),
            flexibility: BudgetFlexibility::Flexible,
        }
    }

    /// Create a bounded budget range
    #[must_use]
    pub fn new(min: f64, max: f64, flexibility: BudgetFlexibility) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            currency: default_currency(),
            flexibility,
        }
    }
}

/// Per-request traveler profile
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TravelerProfile {
    /// Home airport IATA code, if the traveler has a fixed origin
    pub home_airport: Option<String>,
    /// Budget range for the trip
    pub budget: BudgetRange,
    /// Surprise tolerance (1-5): safe top picks vs. enforced variety
    #[serde(default = "default_surprise_tolerance")]
    pub surprise_tolerance: u8,
    /// Primary interest tags
    #[serde(default)]
    pub primary_interests: Vec<String>,
    /// Secondary interest tags
    #[serde(default)]
    pub secondary_interests: Vec<String>,
}

fn default_surprise_tolerance() -> u8 {
    3
}

impl TravelerProfile {
    /// Create a profile with default tolerance and an unlimited budget
    #[must_use]
    pub fn new(home_airport: Option<String>) -> Self {
        Self {
            home_airport,
            budget: BudgetRange::unlimited(),
            surprise_tolerance: default_surprise_tolerance(),
            primary_interests: Vec::new(),
            secondary_interests: Vec::new(),
        }
    }
}

/// A request for destination recommendations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectionRequest {
    /// Traveler profile for this request
    pub profile: TravelerProfile,
    /// Planned departure date
    pub departure_date: NaiveDate,
    /// Planned return date, if known
    pub return_date: Option<NaiveDate>,
    /// Vibe tags the traveler asked for; empty means no preference
    #[serde(default)]
    pub requested_vibes: Vec<String>,
    /// Restrict results to a single region tag
    pub region_filter: Option<String>,
    /// Number of destinations to return
    pub count: usize,
    /// City names to exclude, matched case-insensitively (pagination)
    #[serde(default)]
    pub exclude_destinations: Vec<String>,
}

impl SelectionRequest {
    /// Create a request with no vibe, region, or exclusion constraints
    #[must_use]
    pub fn new(profile: TravelerProfile, departure_date: NaiveDate, count: usize) -> Self {
        Self {
            profile,
            departure_date,
            return_date: None,
            requested_vibes: Vec::new(),
            region_filter: None,
            count,
            exclude_destinations: Vec::new(),
        }
    }
}

/// A destination with its per-request component scores
///
/// Created during one selection call and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDestination {
    /// The catalog entry being scored
    pub destination: Destination,
    /// Seasonal fit for the departure month (0-1)
    pub seasonal_fit: f64,
    /// Overlap with the requested vibes (0-1)
    pub vibe_match: f64,
    /// Fit against the traveler's budget (0-1)
    pub budget_fit: f64,
    /// Convenience of getting there from the home airport (0-1)
    pub reachability: f64,
    /// Learned behavioral preference score (0-1)
    pub revealed_pref: f64,
    /// Weighted total (0-1)
    pub total_score: f64,
}

impl ScoredDestination {
    /// Format the component scores for display
    #[must_use]
    pub fn format_scores(&self) -> String {
        format!(
            "total {:.2} (seasonal {:.2}, vibes {:.2}, budget {:.2}, reach {:.2}, learned {:.2})",
            self.total_score,
            self.seasonal_fit,
            self.vibe_match,
            self.budget_fit,
            self.reachability,
            self.revealed_pref
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_range_defaults() {
        let budget = BudgetRange::unlimited();
        assert!(budget.min.is_none());
        assert!(budget.max.is_none());
        assert_eq!(budget.currency, "USD");
        assert_eq!(budget.flexibility, BudgetFlexibility::Flexible);
    }

    #[test]
    fn test_profile_default_tolerance() {
        let profile = TravelerProfile::new(Some("JFK".to_string()));
        assert_eq!(profile.surprise_tolerance, 3);
        assert_eq!(profile.home_airport.as_deref(), Some("JFK"));
    }

    #[test]
    fn test_budget_flexibility_serde_names() {
        let parsed: BudgetFlexibility = serde_json::from_str("\"splurge_ok\"").unwrap();
        assert_eq!(parsed, BudgetFlexibility::SplurgeOk);

        let parsed: BudgetFlexibility = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(parsed, BudgetFlexibility::Strict);
    }

    #[test]
    fn test_selection_request_roundtrip() {
        let profile = TravelerProfile::new(None);
        let date = NaiveDate::from_ymd_opt(2026, 5, 15).unwrap();
        let request = SelectionRequest::new(profile, date, 5);

        let json = serde_json::to_string(&request).unwrap();
        let back: SelectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.count, 5);
        assert!(back.requested_vibes.is_empty());
    }
}
