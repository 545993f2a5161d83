//! Batch scoring and rank assignment for prioritized review.

use crate::scorer::CredibilityScorer;
use crate::severity::Priority;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tipline_core::Report;

/// Scores below this are flagged for extra scrutiny.
pub const SUSPICIOUS_SCORE_CEILING: u32 = 40;

/// One report's entry in a batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedScore {
    pub report_id: String,
    /// Dense 1-based rank, ascending with descending score
    pub rank: u32,
    pub credibility_score: u32,
    pub priority_level: Priority,
    pub reason: String,
}

/// Result of scoring a whole batch of reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalysis {
    pub analysis: Vec<RankedScore>,
    pub summary: String,
    pub high_priority_count: usize,
    pub suspicious_count: usize,
}

impl BatchAnalysis {
    /// Rank lookup by report id, in the shape the filter layer's rank
    /// override consumes.
    pub fn ranking(&self) -> HashMap<String, u32> {
        self.analysis
            .iter()
            .map(|entry| (entry.report_id.clone(), entry.rank))
            .collect()
    }
}

impl CredibilityScorer {
    /// Score every report, order by descending credibility, and assign
    /// dense ranks starting at 1.
    pub fn score_and_rank(&mut self, reports: &[Report]) -> BatchAnalysis {
        let mut analysis: Vec<RankedScore> = reports
            .iter()
            .map(|report| {
                let scored = self.score(report);
                RankedScore {
                    report_id: report.id.clone(),
                    rank: 0,
                    credibility_score: scored.credibility_score,
                    priority_level: scored.priority_level,
                    reason: scored.priority_reason,
                }
            })
            .collect();

        analysis.sort_by(|a, b| b.credibility_score.cmp(&a.credibility_score));
        for (index, entry) in analysis.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }

        let high_priority_count = analysis
            .iter()
            .filter(|entry| entry.priority_level == Priority::High)
            .count();
        let suspicious_count = analysis
            .iter()
            .filter(|entry| entry.credibility_score < SUSPICIOUS_SCORE_CEILING)
            .count();

        BatchAnalysis {
            summary: format!(
                "Analyzed {} reports: {} high priority, {} need extra scrutiny",
                reports.len(),
                high_priority_count,
                suspicious_count
            ),
            analysis,
            high_priority_count,
            suspicious_count,
        }
    }
}
