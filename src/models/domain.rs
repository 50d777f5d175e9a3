use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::MatchError;

/// Which side of the pairing a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Mentor,
    Mentee,
}

impl ProfileKind {
    /// Prefix used for generated profile ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ProfileKind::Mentor => "mentor",
            ProfileKind::Mentee => "mentee",
        }
    }
}

impl FromStr for ProfileKind {
    type Err = MatchError;

    /// Accepts both the singular and the plural (route segment) form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mentor" | "mentors" => Ok(ProfileKind::Mentor),
            "mentee" | "mentees" => Ok(ProfileKind::Mentee),
            other => Err(MatchError::Validation(format!(
                "unknown profile kind '{}', expected mentors or mentees",
                other
            ))),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

/// Time commitment band a profile can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "1-2 hours/week")]
    OneToTwoHours,
    #[serde(rename = "2-4 hours/week")]
    TwoToFourHours,
    #[serde(rename = "4-6 hours/week")]
    FourToSixHours,
    #[serde(rename = "Flexible")]
    Flexible,
    #[serde(rename = "Weekends only")]
    WeekendsOnly,
}

/// Organizational unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Product,
    Design,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

/// A mentor or mentee record
///
/// Profiles are created once by the store and never mutated afterwards.
/// They are shared as `Arc<Profile>` between the store, run snapshots and
/// the matches built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: Option<f64>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub availability: Availability,
    pub department: Department,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Check the record invariants the engine relies on
    pub fn check(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::Validation(format!(
                "profile '{}' has an empty id",
                self.name
            )));
        }
        check_fields(
            &self.name,
            self.years_of_experience,
            &self.skills,
            &self.goals,
        )
        .map_err(|reason| MatchError::Validation(format!("profile {}: {}", self.id, reason)))
    }
}

/// Field checks shared by stored profiles and incoming drafts
pub(crate) fn check_fields(
    name: &str,
    years_of_experience: Option<f64>,
    skills: &[String],
    goals: &[String],
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be blank".to_string());
    }
    if skills.is_empty() {
        return Err("at least one skill is required".to_string());
    }
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err("skills must not contain blank entries".to_string());
    }
    if goals.iter().any(|g| g.trim().is_empty()) {
        return Err("goals must not contain blank entries".to_string());
    }
    if let Some(years) = years_of_experience {
        if !years.is_finite() || years < 0.0 {
            return Err(format!("yearsOfExperience must be non-negative, got {}", years));
        }
    }
    Ok(())
}

/// One resolved mentee-to-mentor pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub mentee: Arc<Profile>,
    pub mentor: Arc<Profile>,
    pub score: f64,
    #[serde(rename = "sharedSkills")]
    pub shared_skills: Vec<String>,
    pub fallback: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Identifies one matching run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp {
    pub sequence: u64,
    pub started_at: DateTime<Utc>,
}

impl RunStamp {
    pub fn new(sequence: u64, started_at: DateTime<Utc>) -> Self {
        Self { sequence, started_at }
    }

    pub fn now(sequence: u64) -> Self {
        Self::new(sequence, Utc::now())
    }

    /// Match id for a pairing produced by this run
    pub fn match_id(&self, mentee: &Profile, mentor: &Profile) -> String {
        format!("match-{}-{}-{}", mentee.id, mentor.id, self.sequence)
    }
}

/// Summary counts over a match set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "totalMentors")]
    pub total_mentors: usize,
    #[serde(rename = "totalMentees")]
    pub total_mentees: usize,
    #[serde(rename = "totalMatches", alias = "matchedPairs")]
    pub total_matches: usize,
    #[serde(rename = "fallbackMatches", default)]
    pub fallback_matches: usize,
    #[serde(rename = "avgCompatibilityScore")]
    pub avg_compatibility_score: f64,
}

/// Scoring weights
///
/// `department`, `role` and `experience` are flat bonuses added when their
/// predicate holds; `skills` and `goals` scale the normalized overlaps.
/// A zero `role`/`experience` weight means the deployment does not track
/// those fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub goals: f64,
    pub department: f64,
    pub role: f64,
    pub experience: f64,
}

impl ScoringWeights {
    pub const fn skills_heavy() -> Self {
        Self {
            skills: 0.6,
            goals: 0.15,
            department: 0.10,
            role: 0.10,
            experience: 0.05,
        }
    }

    pub const fn skills_only() -> Self {
        Self {
            skills: 0.7,
            goals: 0.2,
            department: 0.10,
            role: 0.0,
            experience: 0.0,
        }
    }

    /// Highest score reachable with every bonus applied
    pub fn sum(&self) -> f64 {
        self.skills + self.goals + self.department + self.role + self.experience
    }

    /// Reject weight sets that could push a score outside [0, 1]
    pub fn validate(&self) -> Result<(), MatchError> {
        let fields = [
            ("skills", self.skills),
            ("goals", self.goals),
            ("department", self.department),
            ("role", self.role),
            ("experience", self.experience),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::Configuration(format!(
                    "weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.sum();
        if sum > 1.0 + WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::Configuration(format!(
                "weights sum to {:.4}, scores could exceed 1.0",
                sum
            )));
        }
        Ok(())
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::skills_heavy()
    }
}

/// Named weight presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightProfile {
    /// Skills, goals, department, role and experience closeness
    SkillsHeavy,
    /// Skills, goals and department; role/experience not tracked
    SkillsOnly,
}

impl WeightProfile {
    pub fn weights(&self) -> ScoringWeights {
        match self {
            WeightProfile::SkillsHeavy => ScoringWeights::skills_heavy(),
            WeightProfile::SkillsOnly => ScoringWeights::skills_only(),
        }
    }
}

impl FromStr for WeightProfile {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "skills-heavy" => Ok(WeightProfile::SkillsHeavy),
            "skills-only" => Ok(WeightProfile::SkillsOnly),
            other => Err(MatchError::Configuration(format!(
                "unknown weight profile '{}', expected skills-heavy or skills-only",
                other
            ))),
        }
    }
}

/// Whether a mentor can be paired with more than one mentee in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exclusivity {
    #[default]
    Shared,
    Exclusive,
}

impl FromStr for Exclusivity {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shared" => Ok(Exclusivity::Shared),
            "exclusive" => Ok(Exclusivity::Exclusive),
            other => Err(MatchError::Configuration(format!(
                "unknown exclusivity mode '{}', expected shared or exclusive",
                other
            ))),
        }
    }
}
