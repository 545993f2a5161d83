//! Tipline Filter: Report Collection View-Model
//!
//! Filtering, sorting, and rank-override ordering applied uniformly by
//! the personal dashboard and the authority review dashboard.
//!
//! # Example
//!
//! ```ignore
//! use tipline_filter::{apply, FilterSpec, FilterSet, FilterUpdate, CategoryFilter};
//!
//! let visible = apply(Some(&reports), &FilterSpec::default());
//!
//! let mut filters = FilterSet::new();
//! filters.update(FilterUpdate::Category(CategoryFilter::only("fraud")));
//! let visible = filters.filtered(Some(&reports));
//! ```

pub mod engine;
pub mod spec;
pub mod state;

pub use engine::apply;
pub use spec::{
    CategoryFilter, FilterOverrides, FilterSpec, FilterUpdate, SortDirection, SortKey,
    StatusFilter,
};
pub use state::FilterSet;
