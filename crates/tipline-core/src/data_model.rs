//! Data Model: Report, Location, AuthorityStats
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A submitted incident record as returned by the backend.
///
/// The client never mutates a `Report`; every view over a collection of
/// reports (filtering, sorting, score annotation) is derived from clones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Opaque backend identifier, unique per report
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g. "fraud"). Unknown slugs are tolerated
    /// everywhere and treated as a default-severity bucket.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ReportStatus,
    /// Incident or submission date as an ISO-ish string; may be malformed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub stake_amount: f64,
    #[serde(default)]
    pub reward_amount: f64,
    #[serde(default)]
    pub evidence_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Report {
    /// Timestamp of the report date in seconds since the epoch.
    ///
    /// Missing or unparsable dates collapse to epoch 0 so that sorting
    /// never drops a record.
    pub fn date_timestamp(&self) -> i64 {
        self.date
            .as_deref()
            .and_then(parse_flexible_date)
            .map(|dt| dt.timestamp())
            .unwrap_or(0)
    }

    /// Whether a non-empty location address was provided.
    pub fn has_location_address(&self) -> bool {
        self.location
            .as_ref()
            .map(|l| !l.address.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Structured address/coordinate pair attached to a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Lifecycle state of a report, owned by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    UnderReview,
    Verified,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::UnderReview => write!(f, "under_review"),
            ReportStatus::Verified => write!(f, "verified"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Client-side draft of a report prior to submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub stake_amount: f64,
}

/// A report plus the review fields kept in local detail storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetail {
    #[serde(flatten)]
    pub report: Report,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,
}

/// Aggregate counters shown on the authority dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorityStats {
    #[serde(default)]
    pub reports_pending: u64,
    #[serde(default)]
    pub reports_verified: u64,
    #[serde(default)]
    pub reports_rejected: u64,
    #[serde(default)]
    pub total_rewards_distributed: f64,
}

/// Parse an ISO-ish date string leniently.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
pub fn parse_flexible_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_timestamp_plain_date() {
        let report = Report {
            date: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        assert!(report.date_timestamp() > 0);
    }

    #[test]
    fn test_date_timestamp_rfc3339() {
        let report = Report {
            date: Some("2024-01-15T10:30:00Z".to_string()),
            ..Default::default()
        };
        assert!(report.date_timestamp() > 0);
    }

    #[test]
    fn test_date_timestamp_malformed_is_epoch() {
        let report = Report {
            date: Some("not-a-date".to_string()),
            ..Default::default()
        };
        assert_eq!(report.date_timestamp(), 0);

        let report = Report::default();
        assert_eq!(report.date_timestamp(), 0);
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Report {
            date: Some("2024-01-10".to_string()),
            ..Default::default()
        };
        let later = Report {
            date: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        assert!(earlier.date_timestamp() < later.date_timestamp());
    }

    #[test]
    fn test_has_location_address() {
        let mut report = Report::default();
        assert!(!report.has_location_address());

        report.location = Some(Location {
            address: "   ".to_string(),
            ..Default::default()
        });
        assert!(!report.has_location_address());

        report.location = Some(Location {
            address: "12 Harbor Street".to_string(),
            ..Default::default()
        });
        assert!(report.has_location_address());
    }

    #[test]
    fn test_report_deserializes_with_missing_fields() {
        let report: Report = serde_json::from_str(r#"{"id":"r-1"}"#).unwrap();
        assert_eq!(report.id, "r-1");
        assert_eq!(report.title, "");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.stake_amount, 0.0);
        assert_eq!(report.evidence_count, 0);
        assert!(report.location.is_none());
    }

    #[test]
    fn test_status_roundtrip() {
        let json = serde_json::to_string(&ReportStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under_review\"");
        let status: ReportStatus = serde_json::from_str("\"verified\"").unwrap();
        assert_eq!(status, ReportStatus::Verified);
    }
}
