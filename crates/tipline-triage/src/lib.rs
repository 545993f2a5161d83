//! Tipline Triage: Heuristic Credibility Scoring
//!
//! This crate provides the local fallback used when the remote AI
//! scoring service is unavailable: per-report credibility scores,
//! priority tiers, batch ranking, verification checklists, and draft
//! enhancement.
//!
//! # Example
//!
//! ```ignore
//! use tipline_triage::CredibilityScorer;
//!
//! let mut scorer = CredibilityScorer::with_seed(42);
//! let result = scorer.score(&report);
//! println!("{}: {}", result.priority_level, result.credibility_score);
//!
//! let batch = scorer.score_and_rank(&reports);
//! println!("{}", batch.summary);
//! ```

pub mod analyzer;
pub mod batch;
pub mod enhance;
pub mod scorer;
pub mod severity;
pub mod suggest;

pub use analyzer::{Analysis, BatchOutcome, RemoteScoring, ReportAnalyzer};
pub use batch::{BatchAnalysis, RankedScore};
pub use enhance::{enhance_draft, EnhancedDraft};
pub use scorer::{CredibilityScorer, ScoreResult, MAX_SCORE, MIN_SCORE};
pub use severity::{CredibilityBand, Priority, SeverityProfile};
pub use suggest::{verification_plan, VerificationPlan};

use tipline_core::Report;

/// Score a single report with an entropy-seeded scorer.
pub fn score_report(report: &Report) -> ScoreResult {
    CredibilityScorer::new().score(report)
}

/// Score and rank a batch with an entropy-seeded scorer.
pub fn score_and_rank(reports: &[Report]) -> BatchAnalysis {
    CredibilityScorer::new().score_and_rank(reports)
}
