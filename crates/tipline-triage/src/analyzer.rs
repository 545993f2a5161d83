//! Boundary between the remote AI scoring service and the local scorer.
//!
//! The remote service is optional and untrusted: any rejection or
//! malformed payload is swallowed here and the heuristic scorer answers
//! instead. Callers see no difference beyond the `heuristic` marker.

use crate::batch::BatchAnalysis;
use crate::scorer::{CredibilityScorer, ScoreResult};
use serde::{Deserialize, Serialize};
use tipline_core::{Report, TiplineError};
use tracing::{debug, warn};

/// Interface of the remote AI scoring service.
pub trait RemoteScoring {
    fn score_one(
        &self,
        report: &Report,
    ) -> impl std::future::Future<Output = Result<ScoreResult, TiplineError>> + Send;

    fn score_batch(
        &self,
        reports: &[Report],
    ) -> impl std::future::Future<Output = Result<BatchAnalysis, TiplineError>> + Send;
}

/// A single-report analysis and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub result: ScoreResult,
    /// True when the local heuristic produced the result
    pub heuristic: bool,
}

/// A batch analysis and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub analysis: BatchAnalysis,
    pub heuristic: bool,
}

/// Remote-first analyzer with transparent local fallback.
pub struct ReportAnalyzer<S> {
    remote: Option<S>,
    scorer: CredibilityScorer,
}

impl<S: RemoteScoring> ReportAnalyzer<S> {
    pub fn new(remote: S, scorer: CredibilityScorer) -> Self {
        Self {
            remote: Some(remote),
            scorer,
        }
    }

    pub fn local_only(scorer: CredibilityScorer) -> Self {
        Self {
            remote: None,
            scorer,
        }
    }

    /// Analyze a single report, preferring the remote service.
    pub async fn analyze(&mut self, report: &Report) -> Analysis {
        if let Some(remote) = &self.remote {
            match remote.score_one(report).await {
                Ok(result) if result_is_well_formed(&result) => {
                    debug!(report_id = %report.id, "remote analysis succeeded");
                    return Analysis {
                        result,
                        heuristic: false,
                    };
                }
                Ok(_) => {
                    warn!(report_id = %report.id, "remote analysis malformed, using local heuristic");
                }
                Err(err) => {
                    warn!(report_id = %report.id, error = %err, "remote analysis failed, using local heuristic");
                }
            }
        }
        Analysis {
            result: self.scorer.score(report),
            heuristic: true,
        }
    }

    /// Analyze and rank a batch, preferring the remote service.
    pub async fn prioritize(&mut self, reports: &[Report]) -> BatchOutcome {
        if let Some(remote) = &self.remote {
            match remote.score_batch(reports).await {
                Ok(analysis) if analysis.analysis.len() == reports.len() => {
                    debug!(count = reports.len(), "remote batch analysis succeeded");
                    return BatchOutcome {
                        analysis,
                        heuristic: false,
                    };
                }
                Ok(_) => {
                    warn!("remote batch analysis incomplete, using local heuristic");
                }
                Err(err) => {
                    warn!(error = %err, "remote batch analysis failed, using local heuristic");
                }
            }
        }
        BatchOutcome {
            analysis: self.scorer.score_and_rank(reports),
            heuristic: true,
        }
    }
}

fn result_is_well_formed(result: &ScoreResult) -> bool {
    result.credibility_score <= 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Priority;

    struct HealthyRemote;

    impl RemoteScoring for HealthyRemote {
        async fn score_one(&self, _report: &Report) -> Result<ScoreResult, TiplineError> {
            Ok(ScoreResult {
                credibility_score: 88,
                priority_level: Priority::High,
                priority_reason: "remote".to_string(),
                observations: vec![],
                recommended_action: "review".to_string(),
                risk_indicators: vec![],
                summary: "remote".to_string(),
            })
        }

        async fn score_batch(&self, reports: &[Report]) -> Result<BatchAnalysis, TiplineError> {
            Ok(BatchAnalysis {
                analysis: reports
                    .iter()
                    .enumerate()
                    .map(|(i, r)| crate::batch::RankedScore {
                        report_id: r.id.clone(),
                        rank: i as u32 + 1,
                        credibility_score: 80,
                        priority_level: Priority::High,
                        reason: "remote".to_string(),
                    })
                    .collect(),
                summary: "remote".to_string(),
                high_priority_count: reports.len(),
                suspicious_count: 0,
            })
        }
    }

    struct DownRemote;

    impl RemoteScoring for DownRemote {
        async fn score_one(&self, _report: &Report) -> Result<ScoreResult, TiplineError> {
            Err(TiplineError::Analysis("service unavailable".to_string()))
        }

        async fn score_batch(&self, _reports: &[Report]) -> Result<BatchAnalysis, TiplineError> {
            Err(TiplineError::Analysis("service unavailable".to_string()))
        }
    }

    struct MalformedRemote;

    impl RemoteScoring for MalformedRemote {
        async fn score_one(&self, _report: &Report) -> Result<ScoreResult, TiplineError> {
            Ok(ScoreResult {
                credibility_score: 400,
                priority_level: Priority::Low,
                priority_reason: String::new(),
                observations: vec![],
                recommended_action: String::new(),
                risk_indicators: vec![],
                summary: String::new(),
            })
        }

        async fn score_batch(&self, _reports: &[Report]) -> Result<BatchAnalysis, TiplineError> {
            Ok(BatchAnalysis {
                analysis: vec![],
                summary: String::new(),
                high_priority_count: 0,
                suspicious_count: 0,
            })
        }
    }

    fn reports() -> Vec<Report> {
        vec![
            Report {
                id: "a".to_string(),
                ..Default::default()
            },
            Report {
                id: "b".to_string(),
                ..Default::default()
            },
        ]
    }

    #[tokio::test]
    async fn test_remote_result_is_used_when_healthy() {
        let mut analyzer = ReportAnalyzer::new(HealthyRemote, CredibilityScorer::with_seed(1));
        let analysis = analyzer.analyze(&reports()[0]).await;
        assert!(!analysis.heuristic);
        assert_eq!(analysis.result.credibility_score, 88);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_heuristic() {
        let mut analyzer = ReportAnalyzer::new(DownRemote, CredibilityScorer::with_seed(1));
        let analysis = analyzer.analyze(&reports()[0]).await;
        assert!(analysis.heuristic);
        assert!(analysis.result.credibility_score >= crate::scorer::MIN_SCORE);
        assert!(analysis.result.credibility_score <= crate::scorer::MAX_SCORE);
    }

    #[tokio::test]
    async fn test_malformed_payload_falls_back() {
        let mut analyzer = ReportAnalyzer::new(MalformedRemote, CredibilityScorer::with_seed(1));
        let analysis = analyzer.analyze(&reports()[0]).await;
        assert!(analysis.heuristic);
        assert!(analysis.result.credibility_score <= 100);
    }

    #[tokio::test]
    async fn test_batch_falls_back_on_incomplete_payload() {
        let batch = reports();
        let mut analyzer = ReportAnalyzer::new(MalformedRemote, CredibilityScorer::with_seed(1));
        let outcome = analyzer.prioritize(&batch).await;
        assert!(outcome.heuristic);
        assert_eq!(outcome.analysis.analysis.len(), batch.len());
    }

    #[tokio::test]
    async fn test_local_only_always_heuristic() {
        let mut analyzer: ReportAnalyzer<HealthyRemote> =
            ReportAnalyzer::local_only(CredibilityScorer::with_seed(1));
        let analysis = analyzer.analyze(&reports()[0]).await;
        assert!(analysis.heuristic);
    }
}
