use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::scoring::calculate_compatibility;
use crate::error::MatchError;
use crate::models::{Exclusivity, Match, Profile, RunStamp, ScoringWeights};

/// Scores below this send a mentee to the fallback pool
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.1;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub weights: ScoringWeights,
    pub exclusivity: Exclusivity,
    pub fallback_threshold: f64,
    /// Treat "mentees but no mentors" as a configuration error instead of an empty run
    pub reject_empty_mentors: bool,
}

impl MatchConfig {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            exclusivity: Exclusivity::Shared,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            reject_empty_mentors: false,
        }
    }

    pub fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    pub fn with_fallback_threshold(mut self, threshold: f64) -> Self {
        self.fallback_threshold = threshold;
        self
    }

    pub fn with_reject_empty_mentors(mut self, reject: bool) -> Self {
        self.reject_empty_mentors = reject;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        self.weights.validate()?;

        // A zero threshold would let a zero score through as a non-fallback match
        if !(self.fallback_threshold > 0.0 && self.fallback_threshold <= 1.0) {
            return Err(MatchError::Configuration(format!(
                "fallback threshold must be in (0, 1], got {}",
                self.fallback_threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Cooperative cancellation signal, checked between mentees
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a cancellable run
#[derive(Debug, Clone)]
pub struct MatchRun {
    pub matches: Vec<Match>,
    /// True when the run stopped early; `matches` then covers a prefix of the mentees
    pub cancelled: bool,
}

/// Best mentor seen so far for one mentee
struct Candidate {
    index: usize,
    score: f64,
    shared_skills: Vec<String>,
}

/// Greedy mentor assignment, one mentee at a time
///
/// # Per-mentee steps
/// 1. Score every eligible mentor
/// 2. Keep the first mentor with the highest score
/// 3. Fall back to a random mentor if the best score is below the threshold
/// 4. In exclusive mode, retire the chosen mentor for the rest of the run
///
/// The matcher operates on snapshots; callers must not mutate the profile
/// collections during a run.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Pair every mentee with a mentor
    ///
    /// Returns one match per mentee, in mentee order. An empty mentee or
    /// mentor list yields an empty result; the run is all-or-nothing on error.
    pub fn run<R: Rng + ?Sized>(
        &self,
        mentees: &[Arc<Profile>],
        mentors: &[Arc<Profile>],
        rng: &mut R,
        stamp: RunStamp,
    ) -> Result<Vec<Match>, MatchError> {
        let outcome = self.run_cancellable(mentees, mentors, rng, stamp, &CancelFlag::new())?;
        Ok(outcome.matches)
    }

    /// Same as [`Matcher::run`], stopping before the next mentee once `cancel` is set
    pub fn run_cancellable<R: Rng + ?Sized>(
        &self,
        mentees: &[Arc<Profile>],
        mentors: &[Arc<Profile>],
        rng: &mut R,
        stamp: RunStamp,
        cancel: &CancelFlag,
    ) -> Result<MatchRun, MatchError> {
        check_profiles(mentees, "mentee")?;
        check_profiles(mentors, "mentor")?;

        if mentors.is_empty() && !mentees.is_empty() && self.config.reject_empty_mentors {
            return Err(MatchError::Configuration(format!(
                "{} mentees to match but no mentors available",
                mentees.len()
            )));
        }

        if mentees.is_empty() || mentors.is_empty() {
            tracing::debug!(
                "Nothing to match ({} mentees, {} mentors)",
                mentees.len(),
                mentors.len()
            );
            return Ok(MatchRun {
                matches: Vec::new(),
                cancelled: false,
            });
        }

        let mut eligible = vec![true; mentors.len()];
        let mut matches = Vec::with_capacity(mentees.len());
        let mut cancelled = false;

        for mentee in mentees {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let best = self.best_candidate(mentee, mentors, &eligible);

            let (index, score, shared_skills, fallback) = match best {
                Some(c) if c.score >= self.config.fallback_threshold => {
                    (c.index, c.score, c.shared_skills, false)
                }
                other => {
                    let index = self.draw_fallback(&eligible, rng);
                    tracing::debug!(
                        "Fallback for mentee {} (best score {:?}) -> mentor {}",
                        mentee.id,
                        other.map(|c| c.score),
                        mentors[index].id
                    );
                    (index, 0.0, Vec::new(), true)
                }
            };

            if self.config.exclusivity == Exclusivity::Exclusive {
                eligible[index] = false;
            }

            let mentor = &mentors[index];
            matches.push(Match {
                id: stamp.match_id(mentee, mentor),
                mentee: Arc::clone(mentee),
                mentor: Arc::clone(mentor),
                score,
                shared_skills,
                fallback,
                created_at: stamp.started_at,
            });
        }

        tracing::info!(
            "Run {} produced {} matches ({} fallback){}",
            stamp.sequence,
            matches.len(),
            matches.iter().filter(|m| m.fallback).count(),
            if cancelled { ", cancelled" } else { "" }
        );

        Ok(MatchRun { matches, cancelled })
    }

    /// Highest-scoring eligible mentor; ties go to the earlier mentor
    fn best_candidate(
        &self,
        mentee: &Profile,
        mentors: &[Arc<Profile>],
        eligible: &[bool],
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (index, mentor) in mentors.iter().enumerate() {
            if !eligible[index] {
                continue;
            }

            let (score, shared_skills) =
                calculate_compatibility(mentee, mentor, &self.config.weights);

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Candidate {
                    index,
                    score,
                    shared_skills,
                });
            }
        }

        best
    }

    /// Uniform random mentor index for a fallback assignment
    ///
    /// Shared mode draws from every mentor. Exclusive mode draws from the
    /// mentors still eligible, and only reuses a mentor once all are taken,
    /// so no mentor repeats while `mentors.len() >= mentees.len()`.
    fn draw_fallback<R: Rng + ?Sized>(&self, eligible: &[bool], rng: &mut R) -> usize {
        let pool: Vec<usize> = match self.config.exclusivity {
            Exclusivity::Shared => (0..eligible.len()).collect(),
            Exclusivity::Exclusive => {
                let open: Vec<usize> = (0..eligible.len()).filter(|&i| eligible[i]).collect();
                if open.is_empty() {
                    (0..eligible.len()).collect()
                } else {
                    open
                }
            }
        };

        pool[rng.gen_range(0..pool.len())]
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Reject snapshots containing invalid records or repeated ids
fn check_profiles(profiles: &[Arc<Profile>], label: &str) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        profile.check()?;
        if !seen.insert(profile.id.as_str()) {
            return Err(MatchError::Validation(format!(
                "duplicate {} id '{}'",
                label, profile.id
            )));
        }
    }
    Ok(())
}
