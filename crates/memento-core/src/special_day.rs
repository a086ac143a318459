use chrono::{DateTime, Datelike, TimeZone};

use crate::config::SpecialDay;
use crate::constants::CIVIL_ZONE;

/// `MM-DD` key of an instant in the civil zone.
pub fn civil_month_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let local = instant.with_timezone(&CIVIL_ZONE);
    format!("{:02}-{:02}", local.month(), local.day())
}

/// First configured special day matching the instant's civil month and day.
///
/// The caller's own timezone has no effect: the instant is normalized to the
/// civil zone before matching.
pub fn resolve_special_day<'a, Tz: TimeZone>(
    instant: &DateTime<Tz>,
    special_days: &'a [SpecialDay],
) -> Option<&'a SpecialDay> {
    let key = civil_month_day(instant);
    special_days.iter().find(|day| day.date.trim() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(date: &str, title: &str) -> SpecialDay {
        SpecialDay {
            date: date.to_string(),
            title: title.to_string(),
            quote: format!("quote for {title}"),
        }
    }

    #[test]
    fn test_match_ignores_year() {
        let days = vec![day("08-17", "birthday")];
        for year in [1990, 2024, 2050] {
            let t = Utc.with_ymd_and_hms(year, 8, 17, 16, 0, 0).unwrap();
            assert_eq!(resolve_special_day(&t, &days).map(|d| d.title.as_str()), Some("birthday"));
        }
    }

    #[test]
    fn test_no_match() {
        let days = vec![day("12-25", "xmas")];
        let t = Utc.with_ymd_and_hms(2024, 12, 24, 16, 0, 0).unwrap();
        assert!(resolve_special_day(&t, &days).is_none());
        assert!(resolve_special_day(&t, &[]).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let days = vec![day("03-01", "first"), day("03-01", "second")];
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        assert_eq!(resolve_special_day(&t, &days).unwrap().title, "first");
    }

    #[test]
    fn test_normalizes_to_new_york() {
        // 02:00 UTC on Jan 1 is still Dec 31 in New York
        let days = vec![day("12-31", "eve"), day("01-01", "new year")];
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 2, 0, 0).unwrap();
        assert_eq!(civil_month_day(&t), "12-31");
        assert_eq!(resolve_special_day(&t, &days).unwrap().title, "eve");
    }

    #[test]
    fn test_caller_zone_is_irrelevant() {
        let days = vec![day("07-04", "independence")];
        let utc = Utc.with_ymd_and_hms(2024, 7, 4, 23, 30, 0).unwrap();
        for hours in [-10, -5, 0, 5, 9, 14] {
            let zone = FixedOffset::east_opt(hours * 3600).unwrap();
            let local = utc.with_timezone(&zone);
            assert_eq!(
                resolve_special_day(&local, &days).map(|d| &d.title),
                resolve_special_day(&utc, &days).map(|d| &d.title),
            );
        }
    }
}
