//! `TripScout` - destination selection and diversity engine
//!
//! This library scores candidate travel destinations against a traveler
//! profile, then selects a diverse, ranked subset modulated by a 1-5
//! surprise tolerance, optionally interleaving discovery picks when
//! behavioral preference signal is available.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;

// Re-export core types for public API
pub use catalog::DestinationCatalog;
pub use config::TripScoutConfig;
pub use error::TripScoutError;
pub use models::{
    BudgetFlexibility, BudgetRange, Destination, ScoredDestination, SelectionRequest,
    TravelerProfile,
};
pub use recommend::{
    PreferenceModel, RecommendationEngine, StaticPreferences, TransferInfo, TransferMode,
    TravelTimeEstimate, calculate_diversity_score, estimate_travel_time,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripScoutError>;
