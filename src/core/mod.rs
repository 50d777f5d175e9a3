// Core algorithm exports
pub mod matcher;
pub mod overlap;
pub mod scoring;
pub mod stats;

pub use matcher::{CancelFlag, MatchConfig, MatchRun, Matcher, DEFAULT_FALLBACK_THRESHOLD};
pub use overlap::{shared_terms, terms_overlap};
pub use scoring::calculate_compatibility;
pub use stats::aggregate;
