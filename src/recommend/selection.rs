//! Diversity-constrained selection
//!
//! Walks a score-sorted candidate list and picks a final ordered subset,
//! trading top-score quality against country/region/vibe repetition. The
//! traveler's surprise tolerance decides how hard variety is enforced:
//! predictable travelers get pure score order, adventurous ones get hard
//! country and region constraints.

use crate::models::{Destination, ScoredDestination};
use std::collections::HashSet;

/// Acceptance floor for the balanced band (tolerance 3). The constant has no
/// stated derivation; it is preserved for behavioral parity.
const BALANCED_ACCEPT_FLOOR: f64 = 0.3;

/// Penalty added when a candidate's country was already selected
const COUNTRY_PENALTY: f64 = 0.3;
/// Penalty added when a candidate's region was already selected
const REGION_PENALTY: f64 = 0.2;
/// Maximum penalty for fully repeated vibes
const VIBE_PENALTY: f64 = 0.2;

/// Running bookkeeping of what the selection has already used
///
/// Scoped to a single selection call, so concurrent requests never share
/// state.
#[derive(Debug, Default)]
struct DiversityTracker {
    countries: HashSet<String>,
    regions: HashSet<String>,
    vibes: HashSet<String>,
}

impl DiversityTracker {
    fn country_used(&self, destination: &Destination) -> bool {
        self.countries.contains(&destination.country.to_lowercase())
    }

    fn region_used(&self, destination: &Destination) -> bool {
        self.regions.contains(&destination.region.to_lowercase())
    }

    /// Diversity penalty for a candidate given what is already selected
    fn penalty(&self, destination: &Destination) -> f64 {
        let mut penalty = 0.0;
        if self.country_used(destination) {
            penalty += COUNTRY_PENALTY;
        }
        if self.region_used(destination) {
            penalty += REGION_PENALTY;
        }
        if !destination.vibes.is_empty() {
            let seen = destination
                .vibes
                .iter()
                .filter(|vibe| self.vibes.contains(&vibe.to_lowercase()))
                .count();
            penalty += VIBE_PENALTY * seen as f64 / destination.vibes.len() as f64;
        }
        penalty
    }

    fn record(&mut self, destination: &Destination) {
        self.countries.insert(destination.country.to_lowercase());
        self.regions.insert(destination.region.to_lowercase());
        for vibe in &destination.vibes {
            self.vibes.insert(vibe.to_lowercase());
        }
    }
}

/// Select up to `count` destinations from a score-sorted candidate list
///
/// `surprise_tolerance` is the 1-5 setting: 1-2 keeps pure score order, 3
/// balances score against a diversity penalty, 4-5 hard-enforces country and
/// region variety until the result is nearly full. A second pass fills any
/// remaining slots from the original order so the result only falls short of
/// `count` when the candidates run out.
#[must_use]
pub fn select_diverse(
    candidates: &[ScoredDestination],
    count: usize,
    surprise_tolerance: u8,
) -> Vec<ScoredDestination> {
    if count == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let diversity_weight = f64::from(surprise_tolerance.saturating_sub(1)) / 4.0;
    let mut tracker = DiversityTracker::default();
    let mut selected: Vec<ScoredDestination> = Vec::with_capacity(count);

    for candidate in candidates {
        if selected.len() >= count {
            break;
        }
        let remaining = count - selected.len();

        // The first pick always goes to the top-scored candidate
        if selected.is_empty() {
            tracker.record(&candidate.destination);
            selected.push(candidate.clone());
            continue;
        }

        let accepted = if surprise_tolerance <= 2 {
            // Predictable: best matches even if repetitive
            true
        } else if surprise_tolerance >= 4 {
            // Adventurous: hard variety unless the result is nearly full
            if tracker.country_used(&candidate.destination) && remaining >= 2 {
                false
            } else {
                !(tracker.region_used(&candidate.destination) && remaining >= 3)
            }
        } else {
            // Balanced: penalty-adjusted score with a guaranteed tail fill
            let effective = candidate.total_score
                - tracker.penalty(&candidate.destination) * diversity_weight;
            effective > BALANCED_ACCEPT_FLOOR || remaining <= 2
        };

        if accepted {
            tracker.record(&candidate.destination);
            selected.push(candidate.clone());
        }
    }

    // Candidates exhausted under diversity constraints: relax and fill from
    // the original score order, skipping exact duplicates.
    if selected.len() < count {
        for candidate in candidates {
            if selected.len() >= count {
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

    selected
}

/// Summarize the country/region/vibe spread of a result set
///
/// Weighted sum of unique ratios: countries 0.4, regions 0.3, vibes 0.3
/// (distinct vibes over total vibe occurrences). Returns 0.0 for an empty
/// set. Useful for monitoring and tests.
#[must_use]
pub fn calculate_diversity_score(destinations: &[Destination]) -> f64 {
    if destinations.is_empty() {
        return 0.0;
    }
    let len = destinations.len() as f64;

    let unique_countries: HashSet<String> = destinations
        .iter()
        .map(|d| d.country.to_lowercase())
        .collect();
    let unique_regions: HashSet<String> = destinations
        .iter()
        .map(|d| d.region.to_lowercase())
        .collect();

    let total_vibes: usize = destinations.iter().map(|d| d.vibes.len()).sum();
    let unique_vibes: HashSet<String> = destinations
        .iter()
        .flat_map(|d| d.vibes.iter().map(|vibe| vibe.to_lowercase()))
        .collect();

    let country_ratio = unique_countries.len() as f64 / len;
    let region_ratio = unique_regions.len() as f64 / len;
    let vibe_ratio = if total_vibes == 0 {
        0.0
    } else {
        unique_vibes.len() as f64 / total_vibes as f64
    };

    country_ratio * 0.4 + region_ratio * 0.3 + vibe_ratio * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_candidate(
        id: &str,
        country: &str,
        region: &str,
        vibes: &[&str],
        total_score: f64,
    ) -> ScoredDestination {
        ScoredDestination {
            destination: Destination {
                id: id.to_string(),
                city: id.to_string(),
                country: country.to_string(),
                region: region.to_string(),
                vibes: vibes.iter().map(|v| v.to_string()).collect(),
                best_months: vec![5, 6],
                average_cost: 1000.0,
                airport_code: "TST".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                highlights: vec![],
            },
            seasonal_fit: 0.8,
            vibe_match: 0.8,
            budget_fit: 0.8,
            reachability: 0.5,
            revealed_pref: 0.5,
            total_score,
        }
    }

    fn sorted_fixture() -> Vec<ScoredDestination> {
        // Already sorted descending, three Spanish entries up top
        vec![
            create_test_candidate("barcelona", "Spain", "southern_europe", &["beach"], 0.95),
            create_test_candidate("seville", "Spain", "southern_europe", &["culture"], 0.90),
            create_test_candidate("madrid", "Spain", "southern_europe", &["culture"], 0.85),
            create_test_candidate("lisbon", "Portugal", "southern_europe", &["food"], 0.80),
            create_test_candidate("paris", "France", "western_europe", &["culture"], 0.75),
            create_test_candidate("bangkok", "Thailand", "southeast_asia", &["food"], 0.70),
        ]
    }

    #[test]
    fn test_predictable_keeps_score_order() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 3, 1);

        let ids: Vec<&str> = selected.iter().map(|s| s.destination.id.as_str()).collect();
        assert_eq!(ids, vec!["barcelona", "seville", "madrid"]);
    }

    #[test]
    fn test_adventurous_skips_repeated_countries() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 4, 5);

        let countries: Vec<&str> = selected
            .iter()
            .map(|s| s.destination.country.as_str())
            .collect();
        // Seville and Madrid are skipped while slots remain
        assert_eq!(countries[0], "Spain");
        assert_ne!(countries[1], "Spain");
    }

    #[test]
    fn test_adventurous_top_two_differ_in_country() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 3, 5);
        assert!(selected.len() >= 2);
        assert_ne!(
            selected[0].destination.country,
            selected[1].destination.country
        );
    }

    #[test]
    fn test_adventurous_skips_repeated_regions() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 4, 5);

        let ids: Vec<&str> = selected.iter().map(|s| s.destination.id.as_str()).collect();
        // Lisbon shares southern_europe with Barcelona and is skipped while
        // 3 or more slots remain; Paris (western_europe) comes next.
        assert_eq!(ids[0], "barcelona");
        assert_eq!(ids[1], "paris");
    }

    #[test]
    fn test_result_reaches_count_via_backfill() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 6, 5);
        assert_eq!(selected.len(), 6);

        // No duplicates after the backfill pass
        let mut ids: Vec<&str> = selected.iter().map(|s| s.destination.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_count_larger_than_pool() {
        let candidates = sorted_fixture();
        let selected = select_diverse(&candidates, 20, 3);
        assert_eq!(selected.len(), candidates.len());
    }

    #[test]
    fn test_zero_count_and_empty_pool() {
        assert!(select_diverse(&sorted_fixture(), 0, 3).is_empty());
        assert!(select_diverse(&[], 5, 3).is_empty());
    }

    #[test]
    fn test_balanced_rejects_heavily_penalized_low_scores() {
        // Three same-country, same-region, same-vibe candidates with weak
        // scores: at tolerance 3 the second and third fall below the floor
        // while more than 2 slots remain.
        let candidates = vec![
            create_test_candidate("a", "Spain", "southern_europe", &["beach"], 0.55),
            create_test_candidate("b", "Spain", "southern_europe", &["beach"], 0.50),
            create_test_candidate("c", "Spain", "southern_europe", &["beach"], 0.45),
            create_test_candidate("d", "France", "western_europe", &["culture"], 0.40),
        ];
        let selected = select_diverse(&candidates, 4, 3);

        // Everything is eventually included via the tail guarantee and
        // backfill, but the diverse candidate is promoted past the clones.
        assert_eq!(selected.len(), 4);
        assert_eq!(selected[0].destination.id, "a");
        assert_eq!(selected[1].destination.id, "d");
    }

    #[test]
    fn test_diversity_score_spread() {
        let all_different = vec![
            create_test_candidate("a", "Spain", "southern_europe", &["beach"], 0.9).destination,
            create_test_candidate("b", "Japan", "east_asia", &["temples"], 0.8).destination,
            create_test_candidate("c", "Peru", "south_america", &["hiking"], 0.7).destination,
        ];
        assert!((calculate_diversity_score(&all_different) - 1.0).abs() < 1e-9);

        let all_same = vec![
            create_test_candidate("a", "Spain", "southern_europe", &["beach"], 0.9).destination,
            create_test_candidate("b", "Spain", "southern_europe", &["beach"], 0.8).destination,
            create_test_candidate("c", "Spain", "southern_europe", &["beach"], 0.7).destination,
        ];
        let score = calculate_diversity_score(&all_same);
        // 0.4/3 + 0.3/3 + 0.3/3
        assert!((score - (1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_diversity_score_empty() {
        assert_eq!(calculate_diversity_score(&[]), 0.0);
    }
}
