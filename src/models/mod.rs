// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Department, Exclusivity, Match, Profile, ProfileKind, RunStamp, ScoringWeights, Stats, WeightProfile};
pub use requests::{ProfileDraft, RunMatchingQuery};
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse, ProfilesResponse, RunMatchingResponse};
