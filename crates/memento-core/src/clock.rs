use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::constants::CIVIL_ZONE;

/// The simulated "current instant" that drives every calculation.
///
/// Replaced wholesale on update; there are no setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationClock {
    instant: DateTime<Utc>,
}

impl SimulationClock {
    /// Clock at the real current time.
    pub fn now() -> Self {
        Self::at_instant(Utc::now())
    }

    pub fn at_instant<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }

    /// Clock for a manually entered date, pinned to local noon in the civil
    /// zone so that day-boundary offsets never shift the date.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
        let instant = CIVIL_ZONE
            .from_local_datetime(&noon)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&noon));
        Self { instant }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Calendar date of the clock in the civil zone.
    pub fn civil_date(&self) -> NaiveDate {
        self.instant.with_timezone(&CIVIL_ZONE).date_naive()
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::now()
    }
}
