use std::sync::Arc;

use crate::models::{Match, Profile, Stats};

/// Summarize a match set against the current populations
///
/// The average score is 0 for an empty match set.
pub fn aggregate(matches: &[Match], mentors: &[Arc<Profile>], mentees: &[Arc<Profile>]) -> Stats {
    let avg_compatibility_score = if matches.is_empty() {
        0.0
    } else {
        matches.iter().map(|m| m.score).sum::<f64>() / matches.len() as f64
    };

    Stats {
        total_mentors: mentors.len(),
        total_mentees: mentees.len(),
        total_matches: matches.len(),
        fallback_matches: matches.iter().filter(|m| m.fallback).count(),
        avg_compatibility_score,
    }
}
