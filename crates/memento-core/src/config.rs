//! Configuration data model.
//!
//! Wire format uses camelCase keys. Every field has a default, so a partial
//! document fills in whatever it leaves out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{parse_date, total_weeks};
use crate::constants::{DEFAULT_BIRTHDATE, DEFAULT_LIFESPAN};
use crate::error::Result;
use crate::layout::Layout;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// ISO `YYYY-MM-DD`. Kept as text; parsed on use.
    pub birthdate: String,
    #[serde(rename = "expectedLifespan", alias = "expected_lifespan")]
    pub expected_lifespan: u32,
}

impl Person {
    pub fn birthdate(&self) -> Result<NaiveDate> {
        parse_date(&self.birthdate)
    }

    pub fn total_weeks(&self) -> Result<u32> {
        total_weeks(self.expected_lifespan)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self {
            birthdate: DEFAULT_BIRTHDATE.to_string(),
            expected_lifespan: DEFAULT_LIFESPAN,
        }
    }
}

/// A recurring date that replaces the grid with a quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    /// `MM-DD`, matched in the civil zone regardless of year.
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quote: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub person: Person,
    #[serde(rename = "specialDays", alias = "special_days")]
    pub special_days: Vec<SpecialDay>,
    pub layout: Layout,
}

impl Config {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
