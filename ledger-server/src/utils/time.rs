//! Time helpers

use chrono::Utc;

/// Current UTC calendar date, e.g. `2024-05-01`.
///
/// Used as the default `joinDate` for members created without one.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_calendar_date() {
        let d = today();
        assert_eq!(d.len(), 10);
        let parts: Vec<&str> = d.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].parse::<u32>().is_ok());
    }
}
