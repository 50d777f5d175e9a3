// Unit tests for Mentor Match

use chrono::Utc;
use mentor_match::core::{
    aggregate, calculate_compatibility,
    overlap::{shared_terms, terms_overlap},
};
use mentor_match::models::{Availability, Department, Match, Profile, ScoringWeights, Stats};
use std::sync::Arc;

fn create_profile(id: &str, skills: &[&str], goals: &[&str], department: Department) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Person {}", id),
        role: None,
        years_of_experience: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        goals: goals.iter().map(|g| g.to_string()).collect(),
        availability: Availability::TwoToFourHours,
        department,
        created_at: Utc::now(),
    }
}

#[test]
fn test_overlap_is_case_insensitive() {
    assert!(terms_overlap("REACT", "react"));
    assert!(terms_overlap("ml", "ML Ops"));
}

#[test]
fn test_shared_skills_subset_of_mentee() {
    let mentee = create_profile("e", &["Python", "Data Analysis", "SQL"], &[], Department::Product);
    let mentor = create_profile("m", &["python", "analysis"], &[], Department::Engineering);

    let shared = shared_terms(&mentee.skills, &mentor.skills);

    assert_eq!(shared, vec!["Python", "Data Analysis"]);
    assert!(shared.iter().all(|s| mentee.skills.contains(s)));
}

#[test]
fn test_skills_only_scenario_with_department() {
    let mentee = create_profile("e", &["JavaScript", "React"], &[], Department::Engineering);
    let mentor = create_profile("a", &["React", "TypeScript"], &[], Department::Engineering);

    let (score, shared) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_only());

    // 0.7 * 0.5 plus the department bonus
    assert!((score - 0.45).abs() < 1e-9);
    assert_eq!(shared, vec!["React"]);
}

#[test]
fn test_skills_heavy_formula() {
    let mentee = create_profile("e", &["Go", "Rust"], &["Growth"], Department::Finance);
    let mentor = create_profile("m", &["Rust", "C", "Zig", "Go"], &["Growth", "Mentoring"], Department::Sales);

    let (score, shared) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());

    // skills 2/4, goals 1/2, no bonuses
    let expected = 0.6 * 0.5 + 0.15 * 0.5;
    assert!((score - expected).abs() < 1e-9);
    assert_eq!(shared, vec!["Go", "Rust"]);
}

#[test]
fn test_empty_goals_do_not_divide_by_zero() {
    let mentee = create_profile("e", &["Go"], &[], Department::Hr);
    let mentor = create_profile("m", &["Go"], &[], Department::Finance);

    let (score, _) = calculate_compatibility(&mentee, &mentor, &ScoringWeights::skills_heavy());

    assert!(score.is_finite());
    assert!((score - 0.6).abs() < 1e-9);
}

#[test]
fn test_stats_mean_score() {
    let mentee = Arc::new(create_profile("e", &["Go"], &[], Department::Hr));
    let mentor = Arc::new(create_profile("m", &["Go"], &[], Department::Hr));
    let matches: Vec<Match> = [0.2, 0.5]
        .iter()
        .map(|&score| Match {
            id: format!("match-{}", score),
            mentee: Arc::clone(&mentee),
            mentor: Arc::clone(&mentor),
            score,
            shared_skills: vec!["Go".to_string()],
            fallback: false,
            created_at: Utc::now(),
        })
        .collect();

    let stats = aggregate(&matches, &[Arc::clone(&mentor)], &[Arc::clone(&mentee)]);

    assert_eq!(stats.total_matches, 2);
    assert!((stats.avg_compatibility_score - 0.35).abs() < 1e-9);
}

#[test]
fn test_stats_serialization() {
    let stats = Stats {
        total_mentors: 2,
        total_mentees: 2,
        total_matches: 2,
        fallback_matches: 1,
        avg_compatibility_score: 0.25,
    };

    let json = serde_json::to_value(stats).unwrap();

    assert_eq!(json["totalMentors"], 2);
    assert_eq!(json["totalMatches"], 2);
    assert_eq!(json["avgCompatibilityScore"], 0.25);
}
