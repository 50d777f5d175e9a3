use crate::error::MatchError;
use crate::models::{Availability, Department, ProfileDraft, ProfileKind};
use crate::services::ProfileStore;

fn draft(
    name: &str,
    role: &str,
    years: f64,
    skills: &[&str],
    goals: &[&str],
    availability: Availability,
    department: Department,
) -> ProfileDraft {
    ProfileDraft {
        name: name.to_string(),
        role: Some(role.to_string()),
        years_of_experience: Some(years),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        goals: goals.iter().map(|g| g.to_string()).collect(),
        availability,
        department,
    }
}

/// Sample mentors for local runs
pub fn demo_mentors() -> Vec<ProfileDraft> {
    vec![
        draft(
            "Sarah Johnson",
            "Engineering Manager",
            8.0,
            &["React", "TypeScript", "Leadership"],
            &["Team Building", "Strategic Planning"],
            Availability::TwoToFourHours,
            Department::Engineering,
        ),
        draft(
            "Michael Chen",
            "Data Scientist",
            5.0,
            &["Python", "ML", "Data Analysis"],
            &["Innovation", "Technical Excellence"],
            Availability::OneToTwoHours,
            Department::Engineering,
        ),
    ]
}

/// Sample mentees for local runs
pub fn demo_mentees() -> Vec<ProfileDraft> {
    vec![
        draft(
            "Alex Rivera",
            "Frontend Engineer",
            2.0,
            &["JavaScript", "React"],
            &["Career Growth"],
            Availability::TwoToFourHours,
            Department::Engineering,
        ),
        draft(
            "Jordan Kim",
            "Product Analyst",
            1.0,
            &["Data Analysis", "SQL"],
            &["Data Science"],
            Availability::FourToSixHours,
            Department::Product,
        ),
    ]
}

/// Load the sample profiles into a store
pub fn seed_demo_profiles(store: &mut ProfileStore) -> Result<(), MatchError> {
    store.extend(ProfileKind::Mentor, demo_mentors())?;
    store.extend(ProfileKind::Mentee, demo_mentees())?;
    Ok(())
}
