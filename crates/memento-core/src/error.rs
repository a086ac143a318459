use std::fmt;

use crate::constants::MAX_LIFESPAN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A date string that is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// An expected lifespan outside `0..=MAX_LIFESPAN` years.
    LifespanTooLong(u32),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidDate(text) => write!(f, "invalid date: '{text}'"),
            CalendarError::LifespanTooLong(years) => write!(
                f,
                "expected lifespan of {years} years exceeds the maximum of {MAX_LIFESPAN}"
            ),
        }
    }
}

impl std::error::Error for CalendarError {}

pub type Result<T> = std::result::Result<T, CalendarError>;
