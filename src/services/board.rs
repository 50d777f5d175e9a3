use crate::models::Match;

/// Result set of the latest matching run
///
/// Each run replaces the previous result set wholesale; matches are never
/// updated after the run that produced them.
#[derive(Debug, Default)]
pub struct MatchBoard {
    latest: Vec<Match>,
    sequence: u64,
}

impl MatchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest result set
    ///
    /// Returns false and keeps the current set when a newer run has already
    /// been published.
    pub fn publish(&mut self, sequence: u64, matches: Vec<Match>) -> bool {
        if sequence < self.sequence {
            tracing::debug!(
                "Discarding results of run {}, run {} already published",
                sequence,
                self.sequence
            );
            return false;
        }
        self.sequence = sequence;
        self.latest = matches;
        true
    }

    pub fn latest(&self) -> &[Match] {
        &self.latest
    }

    /// Sequence of the run behind [`MatchBoard::latest`], 0 before any run
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
