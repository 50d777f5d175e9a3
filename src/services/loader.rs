use serde_json::Value;

use crate::error::MatchError;
use crate::models::ProfileDraft;

/// Parse a JSON document holding an array of profile objects
///
/// The payload is rejected as a whole if it is not an array, if any element
/// is not an object, or if any element fails validation.
pub fn parse_profiles(json: &str) -> Result<Vec<ProfileDraft>, MatchError> {
    let document: Value = serde_json::from_str(json)?;
    drafts_from_value(document)
}

/// Same as [`parse_profiles`] for an already parsed document
pub fn drafts_from_value(document: Value) -> Result<Vec<ProfileDraft>, MatchError> {
    let elements = match document {
        Value::Array(elements) => elements,
        _ => {
            return Err(MatchError::Validation(
                "profile data must be a JSON array".to_string(),
            ))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            if !element.is_object() {
                return Err(MatchError::Validation(format!(
                    "element {} is not a profile object",
                    index
                )));
            }
            let draft: ProfileDraft = serde_json::from_value(element).map_err(|e| {
                MatchError::Validation(format!("element {}: {}", index, e))
            })?;
            draft.check().map_err(|e| match e {
                MatchError::Validation(reason) => {
                    MatchError::Validation(format!("element {}: {}", index, reason))
                }
                other => other,
            })?;
            Ok(draft)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Department};

    #[test]
    fn test_parse_valid_array() {
        let json = r#"[
            {
                "name": "Sarah Johnson",
                "role": "Engineering Manager",
                "yearsOfExperience": 8,
                "skills": ["React", "TypeScript", "Leadership"],
                "goals": ["Team Building"],
                "availability": "2-4 hours/week",
                "department": "Engineering"
            },
            {
                "name": "Jordan Kim",
                "skills": ["SQL"],
                "availability": "Flexible",
                "department": "Product"
            }
        ]"#;

        let drafts = parse_profiles(json).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].years_of_experience, Some(8.0));
        assert_eq!(drafts[0].availability, Availability::TwoToFourHours);
        assert_eq!(drafts[1].department, Department::Product);
        assert!(drafts[1].goals.is_empty());
        assert_eq!(drafts[1].role, None);
    }

    #[test]
    fn test_rejects_non_array() {
        let err = parse_profiles(r#"{"name": "Solo"}"#).unwrap_err();
        assert_eq!(
            err,
            MatchError::Validation("profile data must be a JSON array".to_string())
        );
    }

    #[test]
    fn test_rejects_non_object_element() {
        let err = parse_profiles(r#"["Sarah"]"#).unwrap_err();
        assert!(err.to_string().contains("element 0"));
    }

    #[test]
    fn test_rejects_unknown_department() {
        let json = r#"[{"name": "A", "skills": ["Go"], "availability": "Flexible", "department": "Legal"}]"#;
        assert!(matches!(parse_profiles(json), Err(MatchError::Validation(_))));
    }

    #[test]
    fn test_rejects_empty_skills() {
        let json = r#"[{"name": "A", "skills": [], "availability": "Flexible", "department": "HR"}]"#;
        assert!(parse_profiles(json).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_profiles("[{"), Err(MatchError::Validation(_))));
    }
}
