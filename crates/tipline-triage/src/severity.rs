//! Category severity weights and priority tiers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight assigned to categories the profile does not know about.
pub const UNKNOWN_CATEGORY_WEIGHT: u32 = 50;

static DEFAULT_WEIGHTS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("murder", 100),
        ("violence", 95),
        ("domestic_violence", 90),
        ("cybercrime", 85),
        ("corruption", 80),
        ("fraud", 75),
        ("environmental", 70),
        ("harassment", 65),
        ("theft", 60),
        ("other", 50),
    ])
});

/// Categories whose reports escalate to HIGH priority at a lower score.
pub const SEVERE_CRIME_CATEGORIES: &[&str] = &[
    "murder",
    "violence",
    "domestic_violence",
    "cybercrime",
    "corruption",
];

/// Severity lookup table used by the credibility scorer.
///
/// The built-in weights are part of the scoring contract; a profile can
/// be loaded from YAML for deployments that tune them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityProfile {
    pub name: String,
    pub weights: HashMap<String, u32>,
    pub severe_crimes: Vec<String>,
}

impl SeverityProfile {
    pub fn builtin() -> Self {
        Self {
            name: "builtin@1.0".to_string(),
            weights: DEFAULT_WEIGHTS
                .iter()
                .map(|(slug, weight)| (slug.to_string(), *weight))
                .collect(),
            severe_crimes: SEVERE_CRIME_CATEGORIES
                .iter()
                .map(|slug| slug.to_string())
                .collect(),
        }
    }

    /// Load a profile from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Severity weight for a category slug, case-insensitive.
    pub fn weight(&self, category: &str) -> u32 {
        self.weights
            .get(&category.to_lowercase())
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY_WEIGHT)
    }

    pub fn is_severe_crime(&self, category: &str) -> bool {
        let slug = category.to_lowercase();
        self.severe_crimes.iter().any(|c| *c == slug)
    }
}

impl Default for SeverityProfile {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Priority tier of a report, derived from score and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    /// HIGH at score >= 75 (or >= 60 for severe crimes), MEDIUM at >= 50.
    pub fn from_score(score: u32, severe_crime: bool) -> Self {
        if score >= 75 || (severe_crime && score >= 60) {
            Priority::High
        } else if score >= 50 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// Coarse credibility label shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityBand {
    LikelyGenuine,
    NeedsReview,
    Suspicious,
}

impl CredibilityBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => CredibilityBand::LikelyGenuine,
            40..=69 => CredibilityBand::NeedsReview,
            _ => CredibilityBand::Suspicious,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CredibilityBand::LikelyGenuine => "Likely Genuine",
            CredibilityBand::NeedsReview => "Needs Review",
            CredibilityBand::Suspicious => "Suspicious",
        }
    }
}
