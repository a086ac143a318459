use chrono::NaiveDate;

use crate::calendar::{total_weeks, weeks_lived};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekStatus {
    Past,
    Future,
}

/// Derived week counts for one render. Never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridState {
    /// May be negative (before birth) or exceed `total_weeks` (outlived).
    pub weeks_lived: i64,
    pub total_weeks: u32,
}

impl GridState {
    pub fn new(weeks_lived: i64, total_weeks: u32) -> Self {
        Self {
            weeks_lived,
            total_weeks,
        }
    }

    pub fn compute(birthdate: NaiveDate, reference: NaiveDate, lifespan_years: u32) -> Result<Self> {
        Ok(Self::new(
            weeks_lived(birthdate, reference),
            total_weeks(lifespan_years)?,
        ))
    }

    /// Status of week `index`, or `None` past the end of the lifespan.
    pub fn status(&self, index: u32) -> Option<WeekStatus> {
        week_status(index, self.weeks_lived, self.total_weeks)
    }

    /// Weeks that render as past, clamped to the grid.
    pub fn past_weeks(&self) -> u32 {
        self.weeks_lived.clamp(0, i64::from(self.total_weeks)) as u32
    }

    pub fn future_weeks(&self) -> u32 {
        self.total_weeks - self.past_weeks()
    }

    /// Share of the lifespan lived, clamped to `[0, 100]` for display.
    pub fn percentage(&self) -> f64 {
        if self.total_weeks == 0 {
            return 0.0;
        }
        (self.weeks_lived as f64 / f64::from(self.total_weeks) * 100.0).clamp(0.0, 100.0)
    }
}

/// Shared past/future rule for every layout.
pub fn week_status(index: u32, weeks_lived: i64, total_weeks: u32) -> Option<WeekStatus> {
    if index >= total_weeks {
        None
    } else if i64::from(index) < weeks_lived {
        Some(WeekStatus::Past)
    } else {
        Some(WeekStatus::Future)
    }
}
