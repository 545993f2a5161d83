//! Shared constants for categories, sorting, and local storage keys.

/// Known report categories as `(slug, label)` pairs.
///
/// The backend may introduce new categories at any time; code consuming
/// this list must treat unknown slugs as valid, default-severity input.
pub const REPORT_CATEGORIES: &[(&str, &str)] = &[
    ("environmental", "Environmental"),
    ("fraud", "Fraud"),
    ("cybercrime", "Cybercrime"),
    ("corruption", "Corruption"),
    ("violence", "Violence"),
    ("domestic_violence", "Domestic Violence"),
];

/// Display label for a category slug, falling back to the slug itself.
pub fn category_label(slug: &str) -> &str {
    REPORT_CATEGORIES
        .iter()
        .find(|(value, _)| *value == slug)
        .map(|(_, label)| *label)
        .unwrap_or(slug)
}

/// Keys used by the key-value persistence layer.
pub mod storage_keys {
    pub const REPORTS: &str = "tipline_reports";
    pub const REPORT_DETAILS: &str = "tipline_reports_details";
    pub const TOKEN_BALANCE: &str = "tipline_token_balance";
}

/// Tokens staked by default against a new report.
pub const DEFAULT_STAKE_AMOUNT: f64 = 10.0;

/// Reward multiplier applied to the stake of a verified report.
pub const DEFAULT_REWARD_MULTIPLIER: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_known() {
        assert_eq!(category_label("fraud"), "Fraud");
        assert_eq!(category_label("domestic_violence"), "Domestic Violence");
    }

    #[test]
    fn test_category_label_unknown_falls_back_to_slug() {
        assert_eq!(category_label("smuggling"), "smuggling");
    }
}
