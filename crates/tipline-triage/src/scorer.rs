//! Local credibility scoring.
//!
//! A deterministic heuristic with bounded jitter, used in place of the
//! remote AI service when it is unavailable. The weights, tier
//! thresholds, and the [25, 95] clamp are part of the contract: the
//! clamp deliberately keeps the heuristic from emitting overconfident
//! 0 or 100 scores.

use crate::severity::{Priority, SeverityProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tipline_core::Report;

/// Lowest score the heuristic will emit.
pub const MIN_SCORE: u32 = 25;
/// Highest score the heuristic will emit.
pub const MAX_SCORE: u32 = 95;

const VIOLENT_CATEGORIES: &[&str] = &["murder", "violence", "domestic_violence"];
const HIGH_IMPACT_CATEGORIES: &[&str] = &["cybercrime", "corruption"];

/// Credibility assessment for a single report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Credibility estimate in [25, 95]
    pub credibility_score: u32,
    pub priority_level: Priority,
    pub priority_reason: String,
    /// At most three supporting observations
    pub observations: Vec<String>,
    pub recommended_action: String,
    pub risk_indicators: Vec<String>,
    pub summary: String,
}

/// The heuristic scorer.
///
/// Jitter comes from an injected seedable RNG so tests can pin the
/// output; `new` seeds from entropy for production use.
pub struct CredibilityScorer {
    profile: SeverityProfile,
    rng: StdRng,
}

impl CredibilityScorer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            profile: SeverityProfile::builtin(),
            rng,
        }
    }

    pub fn with_profile(mut self, profile: SeverityProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &SeverityProfile {
        &self.profile
    }

    /// Score one report. Never fails: missing fields fall through to the
    /// zero-contribution branch of each stage.
    pub fn score(&mut self, report: &Report) -> ScoreResult {
        let score = self.raw_score(report);
        let severe = self.profile.is_severe_crime(&report.category);
        let priority = Priority::from_score(score, severe);

        ScoreResult {
            credibility_score: score,
            priority_level: priority,
            priority_reason: self.reason(report, score),
            observations: observations(report),
            recommended_action: recommended_action(priority),
            risk_indicators: risk_indicators(report),
            summary: format!("{} priority report with {}% credibility score", priority, score),
        }
    }

    fn raw_score(&mut self, report: &Report) -> u32 {
        let mut score = 40.0_f64;

        score += f64::from(self.profile.weight(&report.category)) * 0.3;

        score += match report.description.chars().count() {
            len if len > 500 => 15.0,
            len if len > 300 => 12.0,
            len if len > 150 => 8.0,
            len if len > 50 => 4.0,
            _ => 0.0,
        };

        score += match report.evidence_count {
            count if count >= 5 => 15.0,
            count if count >= 3 => 12.0,
            count if count >= 1 => 8.0,
            _ => 0.0,
        };

        score += match report.stake_amount {
            stake if stake >= 20.0 => 10.0,
            stake if stake >= 10.0 => 7.0,
            stake if stake >= 5.0 => 4.0,
            _ => 0.0,
        };

        if report.has_location_address() {
            score += 5.0;
        }

        // Bounded jitter keeps batch output from looking mechanical
        score += f64::from(self.rng.gen_range(-4..=4));

        score.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)).round() as u32
    }

    /// At most the first two matched clauses, checked in fixed order;
    /// a score-banded generic statement when none match.
    fn reason(&self, report: &Report, score: u32) -> String {
        let mut reasons: Vec<&str> = Vec::new();
        let category = report.category.to_lowercase();

        if VIOLENT_CATEGORIES.contains(&category.as_str()) {
            reasons.push("Severe crime category");
        } else if HIGH_IMPACT_CATEGORIES.contains(&category.as_str()) {
            reasons.push("High-impact crime type");
        }
        if report.description.chars().count() > 300 {
            reasons.push("detailed description");
        }
        if report.evidence_count >= 3 {
            reasons.push("multiple evidence files");
        }
        if report.stake_amount >= 15.0 {
            reasons.push("high stake commitment");
        }
        if report.has_location_address() {
            reasons.push("location provided");
        }

        if reasons.is_empty() {
            return if score >= 70 {
                "Multiple credibility indicators present".to_string()
            } else if score >= 50 {
                "Standard report requiring review".to_string()
            } else {
                "Limited details provided".to_string()
            };
        }

        reasons.truncate(2);
        reasons.join(", ")
    }
}

impl Default for CredibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn observations(report: &Report) -> Vec<String> {
    let mut obs = Vec::new();

    if report.evidence_count > 0 {
        obs.push(format!(
            "{} evidence file(s) attached support the claims",
            report.evidence_count
        ));
    }
    if report.stake_amount >= 10.0 {
        obs.push(format!(
            "Reporter staked {} tokens showing commitment",
            report.stake_amount
        ));
    }
    if report.description.chars().count() > 200 {
        obs.push("Detailed description provides context".to_string());
    }
    if report.has_location_address() {
        obs.push("Specific location helps verification".to_string());
    }

    if obs.is_empty() {
        obs.push("Report requires additional verification".to_string());
    }

    obs.truncate(3);
    obs
}

fn risk_indicators(report: &Report) -> Vec<String> {
    let mut risks = Vec::new();

    if report.description.chars().count() < 50 {
        risks.push("Very brief description".to_string());
    }
    if report.evidence_count == 0 {
        risks.push("No evidence files attached".to_string());
    }
    if report.stake_amount < 5.0 {
        risks.push("Low stake amount".to_string());
    }

    risks
}

fn recommended_action(priority: Priority) -> String {
    match priority {
        Priority::High => "Immediate review recommended - escalate if verified".to_string(),
        Priority::Medium => "Standard review process - verify evidence".to_string(),
        Priority::Low => "Low priority - review when resources available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipline_core::Location;

    fn strong_report() -> Report {
        Report {
            id: "r-strong".to_string(),
            title: "Industrial waste dumping".to_string(),
            description: "x".repeat(600),
            category: "murder".to_string(),
            stake_amount: 25.0,
            evidence_count: 6,
            location: Some(Location {
                address: "Dock 4, Riverside".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_is_always_in_bounds() {
        let mut scorer = CredibilityScorer::with_seed(7);

        let empty = scorer.score(&Report::default());
        assert!(empty.credibility_score >= MIN_SCORE);
        assert!(empty.credibility_score <= MAX_SCORE);

        let strong = scorer.score(&strong_report());
        assert!(strong.credibility_score >= MIN_SCORE);
        assert!(strong.credibility_score <= MAX_SCORE);
    }

    #[test]
    fn test_maximal_input_clamps_at_95() {
        // base 40 + severity 30 + desc 15 + evidence 15 + stake 10 +
        // location 5 = 115, clamped regardless of jitter
        for seed in 0..20 {
            let mut scorer = CredibilityScorer::with_seed(seed);
            let result = scorer.score(&strong_report());
            assert_eq!(result.credibility_score, MAX_SCORE);
        }
    }

    #[test]
    fn test_minimal_input_clamps_at_floor_or_above() {
        // base 40 + unknown severity 15 = 55, so jitter keeps it >= 51
        let mut scorer = CredibilityScorer::with_seed(3);
        let result = scorer.score(&Report::default());
        assert!(result.credibility_score >= 51);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let report = strong_report();
        let a = CredibilityScorer::with_seed(42).score(&report);
        let b = CredibilityScorer::with_seed(42).score(&report);
        assert_eq!(a, b);
    }

    #[test]
    fn test_severe_category_escalates_priority() {
        let mut scorer = CredibilityScorer::with_seed(1);
        let report = Report {
            category: "violence".to_string(),
            description: "Witnessed an assault outside the depot gates after closing.".to_string(),
            ..Default::default()
        };
        let result = scorer.score(&report);
        // severity 95 * 0.3 + base 40 + short-desc 4 > 60 even with worst jitter
        assert_eq!(result.priority_level, Priority::High);
    }

    #[test]
    fn test_reason_joins_at_most_two_clauses() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let result = scorer.score(&strong_report());
        assert_eq!(result.priority_reason, "Severe crime category, detailed description");
    }

    #[test]
    fn test_reason_falls_back_to_score_band() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let result = scorer.score(&Report::default());
        assert!(
            result.priority_reason == "Standard report requiring review"
                || result.priority_reason == "Limited details provided"
        );
    }

    #[test]
    fn test_observations_are_bounded() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let result = scorer.score(&strong_report());
        assert!(!result.observations.is_empty());
        assert!(result.observations.len() <= 3);
    }

    #[test]
    fn test_risk_indicators_for_thin_report() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let result = scorer.score(&Report::default());
        assert_eq!(
            result.risk_indicators,
            vec![
                "Very brief description".to_string(),
                "No evidence files attached".to_string(),
                "Low stake amount".to_string(),
            ]
        );
    }

    #[test]
    fn test_score_result_serializes_camel_case() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let json = serde_json::to_string(&scorer.score(&Report::default())).unwrap();
        assert!(json.contains("credibilityScore"));
        assert!(json.contains("priorityLevel"));
        assert!(json.contains("\"MEDIUM\"") || json.contains("\"LOW\"") || json.contains("\"HIGH\""));
    }

    #[test]
    fn test_summary_mentions_priority_and_score() {
        let mut scorer = CredibilityScorer::with_seed(5);
        let result = scorer.score(&strong_report());
        assert!(result.summary.contains("HIGH"));
        assert!(result.summary.contains(&result.credibility_score.to_string()));
    }
}
