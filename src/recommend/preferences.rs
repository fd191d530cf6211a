//! Learned-preference contract
//!
//! The revealed-preference model is an external capability: something that
//! has watched the traveler's swipes and bookings and can score how well a
//! destination fits that history. The engine only consumes the two-function
//! contract below; the learning itself lives elsewhere and can be swapped
//! without touching selection.

use crate::models::Destination;
use std::collections::HashMap;

/// Neutral score used wherever behavioral data is missing
pub const NEUTRAL_PREFERENCE: f64 = 0.5;

/// Contract for an externally learned preference model
pub trait PreferenceModel {
    /// Score how well a destination matches the traveler's revealed
    /// preferences, in [0, 1]
    fn score_destination(&self, destination: &Destination) -> f64;

    /// Whether enough behavioral signal has accumulated for the scores
    /// to be trusted over the static heuristics
    fn has_enough_signals(&self) -> bool;
}

/// A fixed preference table, the simplest possible model
///
/// Useful for demos and for tests that need deterministic preference scores
/// without a real learned model behind them.
#[derive(Debug, Clone, Default)]
pub struct StaticPreferences {
    scores: HashMap<String, f64>,
    enough_signals: bool,
}

impl StaticPreferences {
    /// Create a table from destination-id to score pairs
    #[must_use]
    pub fn new(scores: HashMap<String, f64>, enough_signals: bool) -> Self {
        Self {
            scores,
            enough_signals,
        }
    }

    /// Set the score for one destination id
    pub fn set_score<S: Into<String>>(&mut self, destination_id: S, score: f64) {
        self.scores.insert(destination_id.into(), score);
    }
}

impl PreferenceModel for StaticPreferences {
    fn score_destination(&self, destination: &Destination) -> f64 {
        self.scores
            .get(&destination.id)
            .copied()
            .unwrap_or(NEUTRAL_PREFERENCE)
    }

    fn has_enough_signals(&self) -> bool {
        self.enough_signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_destination(id: &str) -> Destination {
        Destination {
            id: id.to_string(),
            city: "Test City".to_string(),
            country: "Test Country".to_string(),
            region: "test_region".to_string(),
            vibes: vec!["culture".to_string()],
            best_months: vec![5, 6],
            average_cost: 1000.0,
            airport_code: "TST".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            highlights: vec![],
        }
    }

    #[test]
    fn test_static_preferences_lookup() {
        let mut prefs = StaticPreferences::default();
        prefs.set_score("lisbon", 0.9);

        assert_eq!(prefs.score_destination(&create_test_destination("lisbon")), 0.9);
        assert_eq!(
            prefs.score_destination(&create_test_destination("unknown")),
            NEUTRAL_PREFERENCE
        );
    }

    #[test]
    fn test_static_preferences_gate() {
        let prefs = StaticPreferences::new(HashMap::new(), false);
        assert!(!prefs.has_enough_signals());

        let prefs = StaticPreferences::new(HashMap::new(), true);
        assert!(prefs.has_enough_signals());
    }
}
