//! The pure filter/sort pass over a report collection.

use crate::spec::{FilterSpec, SortDirection, SortKey};
use std::cmp::Ordering;
use tipline_core::Report;

/// Apply a filter spec to a report collection.
///
/// Filtering is conjunctive: a record must pass the search, category,
/// and status predicates to remain. The surviving records are cloned
/// into a fresh vector and stably sorted on the spec's single sort key;
/// the input is never mutated. Absent input yields an empty vector.
pub fn apply(data: Option<&[Report]>, spec: &FilterSpec) -> Vec<Report> {
    let Some(data) = data else {
        return Vec::new();
    };

    let needle = spec.search.to_lowercase();
    let mut result: Vec<Report> = data
        .iter()
        .filter(|report| {
            matches_search(report, &needle)
                && spec.category.matches(&report.category)
                && spec.status.matches(report.status)
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, spec.sort_by);
        match spec.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    result
}

fn matches_search(report: &Report, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    report.title.to_lowercase().contains(needle)
        || report.id.to_lowercase().contains(needle)
        || report.description.to_lowercase().contains(needle)
}

fn compare_by_key(a: &Report, b: &Report, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date_timestamp().cmp(&b.date_timestamp()),
        SortKey::Stake => a
            .stake_amount
            .partial_cmp(&b.stake_amount)
            .unwrap_or(Ordering::Equal),
        SortKey::Evidence => a.evidence_count.cmp(&b.evidence_count),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Unordered => Ordering::Equal,
    }
}
