//! Filter specification owned by the UI layer.
//!
//! A `FilterSpec` describes one dashboard's view over a report
//! collection: a free-text search, category and status narrowing, and a
//! single sort key with direction. Callers construct it from defaults
//! plus partial overrides; the overrides are also the restore target for
//! a reset.

use serde::{Deserialize, Serialize};
use tipline_core::ReportStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Substring matched case-insensitively against title, id, description
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort_by: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            status: StatusFilter::All,
            sort_by: SortKey::Date,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl FilterSpec {
    /// Defaults merged with the given partial overrides.
    pub fn with_overrides(overrides: &FilterOverrides) -> Self {
        overrides.apply_to(Self::default())
    }

    /// Replace exactly one field, leaving the others untouched.
    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Search(value) => self.search = value,
            FilterUpdate::Category(value) => self.category = value,
            FilterUpdate::Status(value) => self.status = value,
            FilterUpdate::SortBy(value) => self.sort_by = value,
            FilterUpdate::SortDirection(value) => self.sort_direction = value,
        }
    }
}

/// Category narrowing: the "all" sentinel or one exact category slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    All,
    #[serde(untagged)]
    Only(String),
}

impl CategoryFilter {
    pub fn only(slug: impl Into<String>) -> Self {
        CategoryFilter::Only(slug.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(slug) => slug == category,
        }
    }
}

/// Status narrowing: the "all" sentinel or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    #[serde(untagged)]
    Only(ReportStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Sort key selecting the comparator.
///
/// Values the UI layer sends that are not recognized deserialize to
/// `Unordered`, which compares everything equal instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKey {
    Date,
    Stake,
    Evidence,
    Title,
    Unordered,
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        match value.as_str() {
            "date" => SortKey::Date,
            "stake" => SortKey::Stake,
            "evidence" => SortKey::Evidence,
            "title" => SortKey::Title,
            _ => SortKey::Unordered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Partial spec merged onto the defaults at construction time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOverrides {
    pub search: Option<String>,
    pub category: Option<CategoryFilter>,
    pub status: Option<StatusFilter>,
    pub sort_by: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
}

impl FilterOverrides {
    pub fn apply_to(&self, mut base: FilterSpec) -> FilterSpec {
        if let Some(search) = &self.search {
            base.search = search.clone();
        }
        if let Some(category) = &self.category {
            base.category = category.clone();
        }
        if let Some(status) = self.status {
            base.status = status;
        }
        if let Some(sort_by) = self.sort_by {
            base.sort_by = sort_by;
        }
        if let Some(sort_direction) = self.sort_direction {
            base.sort_direction = sort_direction;
        }
        base
    }
}

/// A single-field replacement applied by `FilterSpec::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Search(String),
    Category(CategoryFilter),
    Status(StatusFilter),
    SortBy(SortKey),
    SortDirection(SortDirection),
}
