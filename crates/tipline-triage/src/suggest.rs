//! Category-specific verification checklists for authority review.

use serde::{Deserialize, Serialize};

/// A verification checklist suggested for one report category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPlan {
    pub steps: Vec<String>,
    pub estimated_time: String,
    pub required_resources: Vec<String>,
}

fn plan(steps: &[&str], estimated_time: &str, resources: &[&str]) -> VerificationPlan {
    VerificationPlan {
        steps: steps.iter().map(|s| s.to_string()).collect(),
        estimated_time: estimated_time.to_string(),
        required_resources: resources.iter().map(|s| s.to_string()).collect(),
    }
}

/// Suggested verification steps for a report category.
///
/// Unknown categories get the generic plan; this never fails.
pub fn verification_plan(category: &str) -> VerificationPlan {
    match category.to_lowercase().as_str() {
        "environmental" => plan(
            &[
                "Verify location coordinates with satellite imagery",
                "Check environmental agency records",
                "Review evidence files for timestamps",
            ],
            "2-3 days",
            &["GIS mapping tools", "Environmental database access"],
        ),
        "fraud" => plan(
            &[
                "Cross-reference financial records",
                "Verify business registration",
                "Check for similar reported patterns",
            ],
            "3-5 days",
            &["Financial records access", "Business registry"],
        ),
        "cybercrime" => plan(
            &[
                "Analyze IP addresses mentioned",
                "Review technical evidence",
                "Check cybersecurity incident databases",
            ],
            "2-4 days",
            &["IT forensics tools", "Threat intelligence feeds"],
        ),
        "corruption" => plan(
            &[
                "Verify official positions mentioned",
                "Check public records",
                "Cross-reference with other reports",
            ],
            "5-7 days",
            &["Government records", "Public disclosure databases"],
        ),
        "violence" => plan(
            &[
                "Verify incident location",
                "Check police reports if available",
                "Review any witness statements",
            ],
            "1-2 days",
            &["Law enforcement liaison", "Medical records if applicable"],
        ),
        _ => plan(
            &[
                "Review all submitted evidence",
                "Verify location if provided",
                "Cross-reference with existing reports",
            ],
            "2-3 days",
            &["Standard verification tools"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_plan() {
        let plan = verification_plan("fraud");
        assert_eq!(plan.estimated_time, "3-5 days");
        assert_eq!(plan.steps.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(verification_plan("Cybercrime"), verification_plan("cybercrime"));
    }

    #[test]
    fn test_unknown_category_gets_generic_plan() {
        let plan = verification_plan("smuggling");
        assert_eq!(plan.required_resources, vec!["Standard verification tools"]);
    }
}
