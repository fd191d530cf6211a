//! Destination recommendation engine
//!
//! This module provides the core recommendation functionality:
//! - Multi-factor scoring of candidate destinations
//! - Weighted aggregation with fresh-user and learned-user profiles
//! - Diversity-constrained selection tuned by surprise tolerance
//! - Discovery interleaving for travelers with behavioral signal
//! - Static travel-time estimation for reachability scoring

pub mod discovery;
pub mod engine;
pub mod preferences;
pub mod scoring;
pub mod selection;
pub mod travel_time;

// Re-export commonly used types from submodules
pub use discovery::{discovery_slots, interleave_with_discovery};
pub use engine::RecommendationEngine;
pub use preferences::{PreferenceModel, StaticPreferences};
pub use scoring::{
    WeightProfile, score_budget_fit, score_destination, score_reachability,
    score_revealed_preference, score_seasonal_fit, score_vibe_match,
};
pub use selection::{calculate_diversity_score, select_diverse};
pub use travel_time::{
    Region, TransferInfo, TransferMode, TravelTimeEstimate, airport_region, estimate_travel_time,
    transfer_info,
};
