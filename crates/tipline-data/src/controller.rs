//! Fetch controllers backing the dashboard views.
//!
//! One controller per mounted view. Each enforces at most one in-flight
//! fetch via a boolean guard and discards results that land after the
//! view was torn down: the teardown handle flips a shared liveness flag
//! that is checked before any state mutation.

use crate::provider::{AuthorityProvider, ReportProvider};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tipline_core::{AuthorityStats, Report, ReportStatus};
use tracing::{debug, warn};

/// Which slice of the user's own reports a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    All,
    ByStatus(ReportStatus),
}

/// View state for a report collection.
#[derive(Debug, Clone, Default)]
pub struct ReportsState {
    pub reports: Vec<Report>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Teardown handle for a view; dropping the view calls `detach`.
#[derive(Debug, Clone)]
pub struct Liveness {
    live: Arc<AtomicBool>,
}

impl Liveness {
    fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn detach(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

/// Controller for the personal dashboard: the user's own reports,
/// optionally narrowed to one status (filtered client-side).
pub struct ReportsController<P> {
    provider: P,
    scope: ReportScope,
    state: ReportsState,
    fetching: AtomicBool,
    liveness: Liveness,
}

impl<P: ReportProvider> ReportsController<P> {
    pub fn new(provider: P, scope: ReportScope) -> Self {
        Self {
            provider,
            scope,
            state: ReportsState {
                loading: true,
                ..Default::default()
            },
            fetching: AtomicBool::new(false),
            liveness: Liveness::new(),
        }
    }

    pub fn state(&self) -> &ReportsState {
        &self.state
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Fetch the view's reports. A second call while one is in flight
    /// is a no-op.
    pub async fn fetch(&mut self) {
        if self.fetching.swap(true, Ordering::SeqCst) {
            return;
        }
        self.state.loading = true;
        self.state.error = None;

        let outcome = match self.scope {
            ReportScope::All => self.provider.list_for_current_user().await,
            ReportScope::ByStatus(status) => self
                .provider
                .list_for_current_user()
                .await
                .map(|reports| reports.into_iter().filter(|r| r.status == status).collect()),
        };

        if self.liveness.is_live() {
            match outcome {
                Ok(reports) => {
                    debug!(count = reports.len(), "reports view refreshed");
                    self.state.reports = reports;
                }
                Err(err) => {
                    warn!(error = %err, "reports fetch failed");
                    self.state.reports = Vec::new();
                    self.state.error = Some(err.to_string());
                }
            }
            self.state.loading = false;
        }
        self.fetching.store(false, Ordering::SeqCst);
    }

    /// Clear the in-flight guard and refetch.
    pub async fn refresh(&mut self) {
        self.fetching.store(false, Ordering::SeqCst);
        self.fetch().await;
    }
}

/// View state for the authority dashboard.
#[derive(Debug, Clone, Default)]
pub struct AuthorityDashboardState {
    pub reports: Vec<Report>,
    pub stats: AuthorityStats,
    pub is_authority: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Controller for the authority dashboard: reports, statistics, and the
/// authority flag fetched together. Non-authority callers fall back to
/// their own reports.
pub struct AuthorityDashboardController<P> {
    provider: P,
    state: AuthorityDashboardState,
    fetching: AtomicBool,
    liveness: Liveness,
}

impl<P: ReportProvider + AuthorityProvider> AuthorityDashboardController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: AuthorityDashboardState {
                loading: true,
                ..Default::default()
            },
            fetching: AtomicBool::new(false),
            liveness: Liveness::new(),
        }
    }

    pub fn state(&self) -> &AuthorityDashboardState {
        &self.state
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub async fn fetch(&mut self) {
        if self.fetching.swap(true, Ordering::SeqCst) {
            return;
        }
        self.state.loading = true;
        self.state.error = None;

        let is_authority = match self.provider.is_authority().await {
            Ok(flag) => flag,
            Err(err) => {
                warn!(error = %err, "authority check failed");
                false
            }
        };
        let reports = if is_authority {
            self.provider.list_all().await
        } else {
            self.provider.list_for_current_user().await
        };
        let stats = self.provider.statistics().await;

        if self.liveness.is_live() {
            match reports {
                Ok(reports) => self.state.reports = reports,
                Err(err) => {
                    warn!(error = %err, "authority dashboard fetch failed");
                    self.state.reports = Vec::new();
                    self.state.error = Some(err.to_string());
                }
            }
            self.state.stats = stats.unwrap_or_default();
            self.state.is_authority = is_authority;
            self.state.loading = false;
        }
        self.fetching.store(false, Ordering::SeqCst);
    }

    pub async fn refresh(&mut self) {
        self.fetching.store(false, Ordering::SeqCst);
        self.fetch().await;
    }
}
