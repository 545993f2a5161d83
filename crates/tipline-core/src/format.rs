//! Display helpers for dates, amounts, and identifiers.

use crate::data_model::parse_flexible_date;
use uuid::Uuid;

/// Format a report date for display.
///
/// Empty input renders as "N/A"; a string that cannot be parsed is echoed
/// back unchanged rather than dropped.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match parse_flexible_date(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format a report date with time for display.
pub fn format_date_time(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match parse_flexible_date(raw) {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Truncate text to `max_chars`, appending an ellipsis when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Format a token amount with thousands separators.
///
/// Fractional parts are kept to two places and dropped entirely for
/// whole amounts.
pub fn format_token_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let whole = amount.trunc() as u64;
    let frac = ((amount - amount.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        out.push_str(&format!(".{:02}", frac));
    }
    out
}

/// Generate a short random identifier for client-side drafts.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
    }

    #[test]
    fn test_format_date_malformed_echoes_input() {
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn test_format_date_parses() {
        assert_eq!(format_date(Some("2024-01-15")), "Jan 15, 2024");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 60), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(0.0), "0");
        assert_eq!(format_token_amount(1234567.0), "1,234,567");
        assert_eq!(format_token_amount(50.5), "50.50");
        assert_eq!(format_token_amount(-1000.0), "-1,000");
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(generate_id(), generate_id());
    }
}
