//! Interfaces of the remote backend binding.
//!
//! The canister binding itself lives outside this workspace; these
//! traits are the seams the services and controllers consume, and what
//! the tests mock.

use std::future::Future;
use tipline_core::{AuthorityStats, Report, ReportDraft, ReportStatus, TiplineError};

/// Report queries and submission against the backend.
pub trait ReportProvider {
    /// Reports submitted by the calling identity.
    fn list_for_current_user(
        &self,
    ) -> impl Future<Output = Result<Vec<Report>, TiplineError>> + Send;

    /// Every report; the backend rejects non-authority callers.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Report>, TiplineError>> + Send;

    /// Every report in one status; authority-only like `list_all`.
    fn list_by_status(
        &self,
        status: ReportStatus,
    ) -> impl Future<Output = Result<Vec<Report>, TiplineError>> + Send;

    fn get_report(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Report>, TiplineError>> + Send;

    fn submit(
        &self,
        draft: &ReportDraft,
    ) -> impl Future<Output = Result<Report, TiplineError>> + Send;

    /// Whether the calling identity holds the authority role.
    fn is_authority(&self) -> impl Future<Output = Result<bool, TiplineError>> + Send;
}

/// Authority-side adjudication and account operations.
pub trait AuthorityProvider {
    fn statistics(&self) -> impl Future<Output = Result<AuthorityStats, TiplineError>> + Send;

    fn verify_report(
        &self,
        id: &str,
        notes: &str,
    ) -> impl Future<Output = Result<(), TiplineError>> + Send;

    fn reject_report(
        &self,
        id: &str,
        notes: &str,
    ) -> impl Future<Output = Result<(), TiplineError>> + Send;

    fn token_balance(&self) -> impl Future<Output = Result<f64, TiplineError>> + Send;
}
