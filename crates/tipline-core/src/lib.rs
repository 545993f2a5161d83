//! Tipline Core: Data Model, Error Model, and Shared Helpers
//!
//! Shared foundation for the tipline client crates. Everything durable
//! lives in the remote backend; the types here are the client-side view
//! of report records, authority statistics, and submission drafts.

pub mod constants;
pub mod data_model;
pub mod error;
pub mod format;

pub use data_model::{
    AuthorityStats, Location, Report, ReportDetail, ReportDraft, ReportStatus,
};
pub use error::TiplineError;

/// Version of the tipline client core
pub const TIPLINE_VERSION: &str = "1.0.0";
