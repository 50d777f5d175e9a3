use chrono::Utc;
use std::sync::Arc;

use crate::error::MatchError;
use crate::models::{Profile, ProfileDraft, ProfileKind};

/// In-memory mentor and mentee collections
///
/// Insertion order is preserved and used as the matching order. Profiles are
/// handed out as `Arc`s, so a snapshot taken with [`ProfileStore::list`] is
/// unaffected by later adds and removes.
#[derive(Debug, Default)]
pub struct ProfileStore {
    mentors: Vec<Arc<Profile>>,
    mentees: Vec<Arc<Profile>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, kind: ProfileKind) -> &Vec<Arc<Profile>> {
        match kind {
            ProfileKind::Mentor => &self.mentors,
            ProfileKind::Mentee => &self.mentees,
        }
    }

    fn collection_mut(&mut self, kind: ProfileKind) -> &mut Vec<Arc<Profile>> {
        match kind {
            ProfileKind::Mentor => &mut self.mentors,
            ProfileKind::Mentee => &mut self.mentees,
        }
    }

    /// Validate a draft and store it with a fresh id and creation time
    pub fn add(&mut self, kind: ProfileKind, draft: ProfileDraft) -> Result<Arc<Profile>, MatchError> {
        let profile = Arc::new(build_profile(kind, draft)?);
        self.collection_mut(kind).push(Arc::clone(&profile));

        tracing::info!("Added {} {} ({})", kind, profile.id, profile.name);
        Ok(profile)
    }

    /// Add several drafts; nothing is stored if any draft is invalid
    pub fn extend(
        &mut self,
        kind: ProfileKind,
        drafts: Vec<ProfileDraft>,
    ) -> Result<Vec<Arc<Profile>>, MatchError> {
        let profiles = drafts
            .into_iter()
            .map(|draft| build_profile(kind, draft).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        self.collection_mut(kind).extend(profiles.iter().cloned());

        tracing::info!("Imported {} {} profiles", profiles.len(), kind);
        Ok(profiles)
    }

    /// Remove a profile by id, returning it if it was present
    pub fn remove(&mut self, kind: ProfileKind, id: &str) -> Option<Arc<Profile>> {
        let collection = self.collection_mut(kind);
        let position = collection.iter().position(|p| p.id == id)?;
        let removed = collection.remove(position);

        tracing::info!("Removed {} {}", kind, id);
        Some(removed)
    }

    /// Point-in-time snapshot of one collection
    pub fn list(&self, kind: ProfileKind) -> Vec<Arc<Profile>> {
        self.collection(kind).clone()
    }

    pub fn get(&self, kind: ProfileKind, id: &str) -> Option<Arc<Profile>> {
        self.collection(kind).iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self, kind: ProfileKind) -> usize {
        self.collection(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty() && self.mentees.is_empty()
    }
}

fn build_profile(kind: ProfileKind, draft: ProfileDraft) -> Result<Profile, MatchError> {
    let draft = draft.normalized();
    draft.check()?;

    Ok(Profile {
        id: format!("{}-{}", kind.id_prefix(), uuid::Uuid::new_v4()),
        name: draft.name,
        role: draft.role,
        years_of_experience: draft.years_of_experience,
        skills: draft.skills,
        goals: draft.goals,
        availability: draft.availability,
        department: draft.department,
        created_at: Utc::now(),
    })
}
