use crate::core::overlap::{count_shared, normalized_overlap, shared_terms};
use crate::models::{Profile, ScoringWeights};

/// Largest experience gap (in years) that still earns the experience bonus
pub const MAX_EXPERIENCE_GAP_YEARS: f64 = 3.0;

/// Calculate the compatibility score (0-1) of a mentor for a mentee
///
/// Scoring formula:
/// score = (
///     skill_score * weights.skills +   # shared skills / larger skill list
///     goal_score * weights.goals +     # shared goals / larger goal list
///     department_bonus +               # same department
///     role_bonus +                     # same role
///     experience_bonus                 # experience gap <= 3 years
/// )
///
/// Returns the score together with the mentee skills shared with the mentor.
pub fn calculate_compatibility(
    mentee: &Profile,
    mentor: &Profile,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let shared_skills = shared_terms(&mentee.skills, &mentor.skills);
    let skill_score = normalized_overlap(
        shared_skills.len(),
        mentee.skills.len(),
        mentor.skills.len(),
    );

    let shared_goals = count_shared(&mentee.goals, &mentor.goals);
    let goal_score = normalized_overlap(shared_goals, mentee.goals.len(), mentor.goals.len());

    let department_bonus = if mentee.department == mentor.department {
        weights.department
    } else {
        0.0
    };

    let total_score = skill_score * weights.skills
        + goal_score * weights.goals
        + department_bonus
        + role_bonus(mentee, mentor, weights)
        + experience_bonus(mentee, mentor, weights);

    // Weights are validated to sum to at most 1; the cap only absorbs rounding.
    (total_score.min(1.0), shared_skills)
}

#[inline]
fn role_bonus(mentee: &Profile, mentor: &Profile, weights: &ScoringWeights) -> f64 {
    match (&mentee.role, &mentor.role) {
        (Some(a), Some(b)) if a == b => weights.role,
        _ => 0.0,
    }
}

#[inline]
fn experience_bonus(mentee: &Profile, mentor: &Profile, weights: &ScoringWeights) -> f64 {
    match (mentee.years_of_experience, mentor.years_of_experience) {
        (Some(a), Some(b)) if (a - b).abs() <= MAX_EXPERIENCE_GAP_YEARS => weights.experience,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Department};
    use chrono::Utc;

    fn create_test_profile(
        id: &str,
        skills: &[&str],
        goals: &[&str],
        department: Department,
    ) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Person {}", id),
            role: None,
            years_of_experience: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            goals: goals.iter().map(|g| g.to_string()).collect(),
            availability: Availability::Flexible,
            department,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_skills_only_example() {
        let mentee = create_test_profile("e1", &["JavaScript", "React"], &[], Department::Product);
        let mentor = create_test_profile("m1", &["React", "TypeScript"], &[], Department::Engineering);

        let (score, shared) =
            calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_only());

        assert!((score - 0.35).abs() < 1e-9);
        assert_eq!(shared, vec!["React"]);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let mentee = create_test_profile("e1", &["JavaScript"], &[], Department::Product);
        let mentor = create_test_profile("m1", &["Python"], &[], Department::Engineering);

        let (score, shared) =
            calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_only());

        assert_eq!(score, 0.0);
        assert!(shared.is_empty());
    }

    #[test]
    fn test_department_bonus() {
        let mentee = create_test_profile("e1", &["Go"], &[], Department::Design);
        let same = create_test_profile("m1", &["Rust"], &[], Department::Design);
        let other = create_test_profile("m2", &["Rust"], &[], Department::Sales);
        let weights = ScoringWeights::skills_heavy();

        let (same_score, _) = calculate_compatibility(&mentee, &same, &weights);
        let (other_score, _) = calculate_compatibility(&mentee, &other, &weights);

        assert!((same_score - 0.10).abs() < 1e-9);
        assert_eq!(other_score, 0.0);
    }

    #[test]
    fn test_goal_overlap() {
        let mentee = create_test_profile("e1", &["Go"], &["Career Growth", "Leadership"], Department::Hr);
        let mentor = create_test_profile("m1", &["Rust"], &["leadership"], Department::Finance);

        let (score, _) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());

        // one shared goal out of max(2, 1) goals
        assert!((score - 0.15 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_role_and_experience_bonuses() {
        let mut mentee = create_test_profile("e1", &["Go"], &[], Department::Hr);
        let mut mentor = create_test_profile("m1", &["Rust"], &[], Department::Finance);
        mentee.role = Some("Data Scientist".to_string());
        mentor.role = Some("Data Scientist".to_string());
        mentee.years_of_experience = Some(2.0);
        mentor.years_of_experience = Some(5.0);

        let (heavy, _) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());
        assert!((heavy - 0.15).abs() < 1e-9);

        // skills-only does not track role or experience
        let (only, _) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_only());
        assert_eq!(only, 0.0);

        mentor.years_of_experience = Some(5.5);
        let (wide_gap, _) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());
        assert!((wide_gap - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_match_stays_in_range() {
        let mut mentee = create_test_profile("e1", &["React"], &["Growth"], Department::Engineering);
        let mut mentor = create_test_profile("m1", &["React"], &["Growth"], Department::Engineering);
        mentee.role = Some("Engineer".to_string());
        mentor.role = Some("Engineer".to_string());
        mentee.years_of_experience = Some(4.0);
        mentor.years_of_experience = Some(6.0);

        let (score, shared) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());

        assert!(score > 0.99 && score <= 1.0);
        assert_eq!(shared, vec!["React"]);
    }
}
