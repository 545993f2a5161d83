//! Service layer over the backend providers.
//!
//! List calls resolve to an empty collection on any failure so the UI
//! can render a "no data" state without its own error path; only
//! submission and adjudication propagate errors.

use crate::provider::{AuthorityProvider, ReportProvider};
use tipline_core::{AuthorityStats, Report, ReportDraft, ReportStatus, TiplineError};
use tracing::{debug, warn};

pub struct ReportService<P> {
    provider: P,
}

impl<P: ReportProvider> ReportService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn submit(&self, draft: &ReportDraft) -> Result<Report, TiplineError> {
        self.provider.submit(draft).await
    }

    pub async fn report_by_id(&self, id: &str) -> Option<Report> {
        match self.provider.get_report(id).await {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, id, "failed to fetch report by id");
                None
            }
        }
    }

    /// The calling user's own reports; `[]` on failure.
    pub async fn user_reports(&self) -> Vec<Report> {
        match self.provider.list_for_current_user().await {
            Ok(reports) => {
                debug!(count = reports.len(), "fetched user reports");
                reports
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch user reports");
                Vec::new()
            }
        }
    }

    /// The calling user's own reports in one status, filtered
    /// client-side; `[]` on failure.
    pub async fn user_reports_by_status(&self, status: ReportStatus) -> Vec<Report> {
        self.user_reports()
            .await
            .into_iter()
            .filter(|report| report.status == status)
            .collect()
    }

    /// All reports for authorities, the user's own otherwise.
    ///
    /// A failed authority check downgrades to the user path rather than
    /// erroring.
    pub async fn all_reports(&self) -> Vec<Report> {
        if self.check_authority().await {
            match self.provider.list_all().await {
                Ok(reports) => {
                    debug!(count = reports.len(), "fetched all reports as authority");
                    return reports;
                }
                Err(err) => {
                    warn!(error = %err, "failed to fetch all reports");
                    return Vec::new();
                }
            }
        }
        self.user_reports().await
    }

    /// Status-scoped variant of `all_reports`.
    pub async fn reports_by_status(&self, status: ReportStatus) -> Vec<Report> {
        if self.check_authority().await {
            match self.provider.list_by_status(status).await {
                Ok(reports) => return reports,
                Err(err) => {
                    warn!(error = %err, %status, "failed to fetch reports by status");
                    return Vec::new();
                }
            }
        }
        self.user_reports_by_status(status).await
    }

    async fn check_authority(&self) -> bool {
        match self.provider.is_authority().await {
            Ok(is_authority) => is_authority,
            Err(err) => {
                warn!(error = %err, "authority check failed");
                false
            }
        }
    }
}

pub struct AuthorityService<A> {
    provider: A,
}

impl<A: AuthorityProvider> AuthorityService<A> {
    pub fn new(provider: A) -> Self {
        Self { provider }
    }

    /// Dashboard counters; zeroed defaults on failure.
    pub async fn statistics(&self) -> AuthorityStats {
        match self.provider.statistics().await {
            Ok(stats) => stats,
            Err(err) => {
                warn!(error = %err, "failed to fetch authority statistics");
                AuthorityStats::default()
            }
        }
    }

    pub async fn verify_report(&self, id: &str, notes: &str) -> Result<(), TiplineError> {
        self.provider.verify_report(id, notes).await
    }

    pub async fn reject_report(&self, id: &str, notes: &str) -> Result<(), TiplineError> {
        self.provider.reject_report(id, notes).await
    }

    /// Current token balance; 0 on failure.
    pub async fn token_balance(&self) -> f64 {
        match self.provider.token_balance().await {
            Ok(balance) => balance,
            Err(err) => {
                warn!(error = %err, "failed to fetch token balance");
                0.0
            }
        }
    }
}
