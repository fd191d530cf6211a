//! Discovery interleaving
//!
//! When enough behavioral signal exists, a learned model tends to collapse
//! onto the traveler's past favorites. To keep it exploring, roughly a
//! quarter of the output slots are reserved for "discovery": destinations
//! the model currently undervalues but that still make a reasonable trip.
//! Discovery picks land on every third position rather than trailing at the
//! end.

use crate::models::ScoredDestination;
use crate::recommend::selection::select_diverse;
use rand::rand_core::RngCore;
use rand::seq::SliceRandom;

/// Share of output slots reserved for discovery picks
const DISCOVERY_FRACTION: f64 = 0.25;
/// Minimum (vibe + seasonal) / 2 for a discovery candidate to stay plausible
const PLAUSIBILITY_FLOOR: f64 = 0.4;
/// Discovery targets destinations the learned model scores below this
const PREFERENCE_CEILING: f64 = 0.6;

/// Number of output slots reserved for discovery, at least one
#[must_use]
pub fn discovery_slots(count: usize) -> usize {
    (((count as f64) * DISCOVERY_FRACTION).floor() as usize).max(1)
}

/// Select destinations with discovery picks interleaved
///
/// Top picks come from the diversity selector for the non-reserved slots.
/// The discovery pool is every unselected candidate that is still a
/// plausible trip but undervalued by the learned model, shuffled with the
/// injected random source. Every position where `(index + 1) % 3 == 0`
/// draws from the discovery list while it lasts; an exhausted list yields
/// to the other.
#[must_use]
pub fn interleave_with_discovery<R: RngCore>(
    candidates: &[ScoredDestination],
    count: usize,
    surprise_tolerance: u8,
    rng: &mut R,
) -> Vec<ScoredDestination> {
    if count == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let reserved = discovery_slots(count);
    let top_picks = select_diverse(candidates, count - reserved, surprise_tolerance);

    let mut pool: Vec<ScoredDestination> = candidates
        .iter()
        .filter(|candidate| {
            !top_picks
                .iter()
                .any(|pick| pick.destination.id == candidate.destination.id)
        })
        .filter(|candidate| (candidate.vibe_match + candidate.seasonal_fit) / 2.0 > PLAUSIBILITY_FLOOR)
        .filter(|candidate| candidate.revealed_pref < PREFERENCE_CEILING)
        .cloned()
        .collect();

    pool.shuffle(rng);
    pool.truncate(reserved);

    let mut top_iter = top_picks.into_iter();
    let mut discovery_iter = pool.into_iter();
    let mut result = Vec::with_capacity(count);

    for index in 0..count {
        let pick = if (index + 1) % 3 == 0 {
            discovery_iter.next().or_else(|| top_iter.next())
        } else {
            top_iter.next().or_else(|| discovery_iter.next())
        };
        match pick {
            Some(scored) => result.push(scored),
            None => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Destination;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_candidate(
        id: &str,
        total_score: f64,
        revealed_pref: f64,
    ) -> ScoredDestination {
        ScoredDestination {
            destination: Destination {
                id: id.to_string(),
                city: id.to_string(),
                country: id.to_string(),
                region: format!("region_{id}"),
                vibes: vec!["culture".to_string()],
                best_months: vec![5, 6],
                average_cost: 1000.0,
                airport_code: "TST".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                highlights: vec![],
            },
            seasonal_fit: 1.0,
            vibe_match: 0.8,
            budget_fit: 0.8,
            reachability: 0.5,
            revealed_pref,
            total_score,
        }
    }

    /// Candidates sorted by score: the top half loved by the model, the
    /// bottom half undervalued (discovery targets).
    fn candidate_fixture() -> Vec<ScoredDestination> {
        vec![
            create_test_candidate("a", 0.95, 0.9),
            create_test_candidate("b", 0.90, 0.9),
            create_test_candidate("c", 0.85, 0.9),
            create_test_candidate("d", 0.80, 0.9),
            create_test_candidate("e", 0.75, 0.9),
            create_test_candidate("f", 0.70, 0.9),
            create_test_candidate("u", 0.50, 0.3),
            create_test_candidate("v", 0.45, 0.3),
            create_test_candidate("w", 0.40, 0.3),
            create_test_candidate("x", 0.35, 0.3),
        ]
    }

    #[test]
    fn test_discovery_slot_count() {
        assert_eq!(discovery_slots(8), 2);
        assert_eq!(discovery_slots(4), 1);
        assert_eq!(discovery_slots(12), 3);
        // Always at least one reserved slot
        assert_eq!(discovery_slots(1), 1);
        assert_eq!(discovery_slots(2), 1);
    }

    #[test]
    fn test_discovery_positions_for_count_eight() {
        let candidates = candidate_fixture();
        let mut rng = StdRng::seed_from_u64(7);
        let result = interleave_with_discovery(&candidates, 8, 3, &mut rng);

        assert_eq!(result.len(), 8);
        let discovery_ids = ["u", "v", "w", "x"];
        for (index, scored) in result.iter().enumerate() {
            let is_discovery = discovery_ids.contains(&scored.destination.id.as_str());
            if index == 2 || index == 5 {
                assert!(is_discovery, "position {index} should be a discovery pick");
            } else {
                assert!(!is_discovery, "position {index} should be a top pick");
            }
        }
    }

    #[test]
    fn test_no_duplicates_in_output() {
        let candidates = candidate_fixture();
        let mut rng = StdRng::seed_from_u64(3);
        let result = interleave_with_discovery(&candidates, 8, 3, &mut rng);

        let mut ids: Vec<&str> = result.iter().map(|s| s.destination.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), result.len());
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let candidates = candidate_fixture();
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = interleave_with_discovery(&candidates, 8, 3, &mut first_rng);
        let second = interleave_with_discovery(&candidates, 8, 3, &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_discovery_pool_falls_back_to_top_picks() {
        // Every candidate is well-loved by the model: the pool filter leaves
        // nothing, and discovery positions draw from the top picks instead.
        let candidates: Vec<ScoredDestination> = (0..8)
            .map(|i| create_test_candidate(&format!("d{i}"), 0.9 - 0.05 * i as f64, 0.9))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        let result = interleave_with_discovery(&candidates, 4, 3, &mut rng);

        // Three top-pick slots plus one reserved slot backfilled from the
        // score order by the caller; the interleaver itself returns the
        // top picks it has.
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_implausible_candidates_never_discovered() {
        let mut candidates = candidate_fixture();
        // Make every undervalued candidate implausible as a trip
        for candidate in &mut candidates {
            if candidate.revealed_pref < 0.6 {
                candidate.seasonal_fit = 0.3;
                candidate.vibe_match = 0.2;
            }
        }
        let mut rng = StdRng::seed_from_u64(11);
        let result = interleave_with_discovery(&candidates, 8, 3, &mut rng);

        for scored in &result {
            assert!(scored.revealed_pref >= 0.6, "{}", scored.destination.id);
        }
    }

    #[test]
    fn test_single_slot_request() {
        let candidates = candidate_fixture();
        let mut rng = StdRng::seed_from_u64(5);
        let result = interleave_with_discovery(&candidates, 1, 3, &mut rng);
        // One slot, fully reserved for discovery; the top-pick list is empty
        assert_eq!(result.len(), 1);
        assert!(result[0].revealed_pref < 0.6);
    }
}
