//! Mentor Match - mentor/mentee compatibility matching service
//!
//! This library provides the matching engine: a similarity scorer over
//! overlapping skills and goals, a greedy best-mentor search with a random
//! fallback, and summary stats over the resulting pairings. The profile
//! store, JSON loader and HTTP routes wrap the engine as a service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{aggregate, calculate_compatibility, CancelFlag, MatchConfig, MatchRun, Matcher};
pub use error::MatchError;
pub use models::{Exclusivity, Match, Profile, ProfileDraft, ProfileKind, RunStamp, ScoringWeights, Stats, WeightProfile};
pub use services::{parse_profiles, ProfileStore};
