use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A calendar day, formatted as `YYYY-MM-DD` on the wire and on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn days_back(self, days: u32) -> Self {
        Self(self.0 - Duration::days(i64::from(days)))
    }

    pub fn pred(self) -> Self {
        self.days_back(1)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

/// Day key of the host clock's local calendar day.
pub fn today_key() -> DayKey {
    day_key(&Local::now())
}

/// Day key of `instant`, taken from its local date components rather than
/// from the UTC day.
pub fn day_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayKey {
    DayKey(instant.date_naive())
}

/// `n` consecutive day keys ending at `today`, oldest first.
pub fn trailing_window(today: DayKey, n: usize) -> Vec<DayKey> {
    (0..n as u32).rev().map(|offset| today.days_back(offset)).collect()
}
