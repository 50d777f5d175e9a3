use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::MatchError;
use crate::models::domain::{check_fields, Availability, Department};

/// Profile fields supplied by the caller; id and createdAt are assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "years_of_experience", rename = "yearsOfExperience", default)]
    pub years_of_experience: Option<f64>,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub availability: Availability,
    pub department: Department,
}

impl ProfileDraft {
    /// Run the derive validators plus the entry-level checks
    pub fn check(&self) -> Result<(), MatchError> {
        self.validate()?;
        check_fields(
            &self.name,
            self.years_of_experience,
            &self.skills,
            &self.goals,
        )
        .map_err(|reason| MatchError::Validation(format!("{}: {}", self.name, reason)))
    }

    /// Trim text fields, drop exact duplicate skills/goals and blank roles
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.role = self
            .role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self.skills = dedup_entries(self.skills);
        self.goals = dedup_entries(self.goals);
        self
    }
}

fn dedup_entries(entries: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.trim().to_string();
        if !kept.iter().any(|k| k.to_lowercase() == entry.to_lowercase()) {
            kept.push(entry);
        }
    }
    kept
}

/// Query parameters for a matching run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunMatchingQuery {
    /// Seed for the fallback random source; overrides the configured seed
    #[serde(default)]
    pub seed: Option<u64>,
}
