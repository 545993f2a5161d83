//! Stateful filter set held by a dashboard view.

use crate::engine;
use crate::spec::{FilterOverrides, FilterSpec, FilterUpdate};
use std::cmp::Ordering;
use std::collections::HashMap;
use tipline_core::Report;

/// One dashboard's filter state.
///
/// The baseline is the defaults merged with the overrides supplied at
/// construction time; `reset` restores that baseline, not the bare
/// defaults, so two views constructed with different overrides reset to
/// their own starting points.
#[derive(Debug, Clone)]
pub struct FilterSet {
    baseline: FilterSpec,
    current: FilterSpec,
    ranking: Option<HashMap<String, u32>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::with_overrides(FilterOverrides::default())
    }

    pub fn with_overrides(overrides: FilterOverrides) -> Self {
        let baseline = FilterSpec::with_overrides(&overrides);
        Self {
            current: baseline.clone(),
            baseline,
            ranking: None,
        }
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.current
    }

    /// Replace exactly one field of the current spec.
    pub fn update(&mut self, update: FilterUpdate) {
        self.current.update(update);
    }

    /// Restore the construction-time baseline.
    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
    }

    /// Install a rank override from a batch analysis.
    ///
    /// While present, `filtered` orders the filtered set by ascending
    /// rank; reports without a rank entry keep their filtered order at
    /// the end.
    pub fn set_ranking(&mut self, ranks: HashMap<String, u32>) {
        self.ranking = Some(ranks);
    }

    pub fn clear_ranking(&mut self) {
        self.ranking = None;
    }

    pub fn has_ranking(&self) -> bool {
        self.ranking.is_some()
    }

    /// The current view over `data`: filter, sort, then rank override.
    pub fn filtered(&self, data: Option<&[Report]>) -> Vec<Report> {
        let mut result = engine::apply(data, &self.current);
        if let Some(ranking) = &self.ranking {
            result.sort_by(|a, b| match (ranking.get(&a.id), ranking.get(&b.id)) {
                (Some(rank_a), Some(rank_b)) => rank_a.cmp(rank_b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        result
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{CategoryFilter, FilterUpdate, StatusFilter};
    use tipline_core::ReportStatus;

    fn report(id: &str) -> Report {
        Report {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reset_restores_baseline_overrides() {
        let overrides = FilterOverrides {
            status: Some(StatusFilter::Only(ReportStatus::Pending)),
            ..Default::default()
        };
        let mut filters = FilterSet::with_overrides(overrides);

        filters.update(FilterUpdate::Category(CategoryFilter::only("fraud")));
        filters.update(FilterUpdate::Status(StatusFilter::All));
        filters.reset();

        assert_eq!(
            filters.spec().status,
            StatusFilter::Only(ReportStatus::Pending)
        );
        assert_eq!(filters.spec().category, CategoryFilter::All);
    }

    #[test]
    fn test_ranking_overrides_order_until_cleared() {
        let data = vec![report("a"), report("b"), report("c")];
        let mut filters = FilterSet::new();

        let ranks = HashMap::from([("c".to_string(), 1), ("a".to_string(), 2)]);
        filters.set_ranking(ranks);

        let ordered = filters.filtered(Some(&data));
        let ids: Vec<&str> = ordered.iter().map(|r| r.id.as_str()).collect();
        // ranked first by ascending rank, unranked "b" last
        assert_eq!(ids, vec!["c", "a", "b"]);

        filters.clear_ranking();
        assert!(!filters.has_ranking());
        assert_eq!(filters.filtered(Some(&data)).len(), 3);
    }
}
