//! Birthday-anniversary week arithmetic.
//!
//! A year is always 52 weeks here. Weeks are counted from the most recent
//! birthday, so the count resets to `years * 52` on every birthday instead of
//! drifting by a day or two per year.

use chrono::{Datelike, NaiveDate};

use crate::constants::{MAX_LIFESPAN, WEEKS_PER_YEAR};
use crate::error::{CalendarError, Result};

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(text.to_string()))
}

/// Birthday anniversary in `year`. Feb 29 rolls over to Mar 1 in common years.
fn anniversary(birthdate: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthdate.month() + 1, 1))
        .unwrap_or(birthdate)
}

/// Completed years and the most recent anniversary on or before `reference`.
fn last_anniversary(birthdate: NaiveDate, reference: NaiveDate) -> (i64, NaiveDate) {
    let years = i64::from(reference.year() - birthdate.year());
    let this_year = anniversary(birthdate, reference.year());
    if reference < this_year {
        (years - 1, anniversary(birthdate, reference.year() - 1))
    } else {
        (years, this_year)
    }
}

/// Completed birthday-anniversary years at `reference`.
/// Negative when `reference` is more than a year before birth.
pub fn age_years(birthdate: NaiveDate, reference: NaiveDate) -> i64 {
    last_anniversary(birthdate, reference).0
}

/// Weeks lived: `completed_years * 52 + whole weeks since the last birthday`.
///
/// Negative results are possible for reference dates before birth and are
/// returned as-is; clamping is a display concern.
pub fn weeks_lived(birthdate: NaiveDate, reference: NaiveDate) -> i64 {
    let (years, since) = last_anniversary(birthdate, reference);
    let weeks_since = (reference - since).num_days().div_euclid(7);
    years * i64::from(WEEKS_PER_YEAR) + weeks_since
}

/// Total weeks in a lifespan of `lifespan_years`, at most [`MAX_LIFESPAN`] years.
pub fn total_weeks(lifespan_years: u32) -> Result<u32> {
    if lifespan_years > MAX_LIFESPAN {
        return Err(CalendarError::LifespanTooLong(lifespan_years));
    }
    Ok(lifespan_years * WEEKS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let b = date("1987-08-17");
        assert_eq!(weeks_lived(b, b), 0);
    }

    #[test]
    fn test_one_full_year() {
        assert_eq!(weeks_lived(date("2000-01-01"), date("2001-01-01")), 52);
    }

    #[test]
    fn test_day_before_birthday() {
        // 364 days after 2000-01-01 → 0 years, 52 weeks
        assert_eq!(weeks_lived(date("2000-01-01"), date("2000-12-31")), 52);
        assert_eq!(age_years(date("2000-01-01"), date("2000-12-31")), 0);
    }

    #[test]
    fn test_partial_weeks_truncate() {
        let b = date("2020-03-10");
        assert_eq!(weeks_lived(b, date("2020-03-16")), 0);
        assert_eq!(weeks_lived(b, date("2020-03-17")), 1);
        assert_eq!(weeks_lived(b, date("2020-03-30")), 2);
    }

    #[test]
    fn test_thirty_four_years() {
        let b = date("1990-06-15");
        assert_eq!(weeks_lived(b, date("2024-06-15")), 34 * 52);
        assert_eq!(age_years(b, date("2024-06-15")), 34);
        assert_eq!(age_years(b, date("2024-06-14")), 33);
    }

    #[test]
    fn test_leap_day_birthday_rolls_to_march() {
        let b = date("2000-02-29");
        assert_eq!(anniversary(b, 2001), date("2001-03-01"));
        assert_eq!(anniversary(b, 2004), date("2004-02-29"));
        assert_eq!(age_years(b, date("2001-02-28")), 0);
        assert_eq!(age_years(b, date("2001-03-01")), 1);
        assert_eq!(weeks_lived(b, date("2001-03-01")), 52);
    }

    #[test]
    fn test_before_birth_is_negative() {
        let b = date("2000-06-15");
        assert!(weeks_lived(b, date("1990-01-01")) < 0);
        assert_eq!(age_years(b, date("1998-06-15")), -2);
    }

    #[test]
    fn test_total_weeks() {
        assert_eq!(total_weeks(80), Ok(4160));
        assert_eq!(total_weeks(0), Ok(0));
        assert_eq!(total_weeks(1), Ok(52));
        assert_eq!(total_weeks(150), Ok(7800));
    }

    #[test]
    fn test_total_weeks_rejects_huge_lifespan() {
        assert_eq!(total_weeks(151), Err(CalendarError::LifespanTooLong(151)));
        assert_eq!(
            total_weeks(100_000_000),
            Err(CalendarError::LifespanTooLong(100_000_000))
        );
        assert_eq!(total_weeks(u32::MAX), Err(CalendarError::LifespanTooLong(u32::MAX)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("not-a-date"),
            Err(CalendarError::InvalidDate("not-a-date".to_string()))
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date(" 1987-08-17 ").is_ok());
    }
}
