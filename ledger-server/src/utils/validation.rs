//! Input normalization helpers
//!
//! Text fields arrive untrimmed from the browser; these helpers centralize
//! the trim rules so the repositories apply them consistently.

/// Trim a required field. Returns `None` when the value is missing or blank
/// after trimming.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim an optional field, preserving presence.
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Trim an optional field, defaulting to the empty string when absent.
pub fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert_eq!(non_blank(Some("  Asha ")), Some("Asha".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn trimmed_preserves_presence() {
        assert_eq!(trimmed(Some(" x ")), Some("x".to_string()));
        assert_eq!(trimmed(None), None);
    }

    #[test]
    fn trimmed_or_empty_defaults() {
        assert_eq!(trimmed_or_empty(None), "");
        assert_eq!(trimmed_or_empty(Some(" 12 Main St ")), "12 Main St");
    }
}
