//! Day and month keys.
//!
//! Both keys are zero padded (`YYYY-MM-DD`, `YYYY-MM`), so the string form sorts the same
//! way the dates do and a day belongs to a month exactly when its key starts with the
//! month key.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalError, CalResult};

/// Years that fit the four-digit key format.
const KEY_YEARS: RangeInclusive<i32> = 0..=9999;

/// A calendar day, used as the bucket key of the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Parse a `YYYY-MM-DD` key. Years outside 0000..=9999 are rejected.
    pub fn parse(s: &str) -> CalResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .filter(|date| KEY_YEARS.contains(&date.year()))
            .map(DateKey)
            .ok_or_else(|| CalError::InvalidDate(s.to_string()))
    }

    /// Today in local wall-clock time.
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        DateKey::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A calendar month. Internally the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        MonthKey(date - chrono::Days::new(u64::from(date.day0())))
    }

    /// Parse a `YYYY-MM` key. Years outside 0000..=9999 are rejected.
    pub fn parse(s: &str) -> CalResult<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .ok()
            .filter(|date| KEY_YEARS.contains(&date.year()))
            .map(MonthKey)
            .ok_or_else(|| CalError::InvalidMonth(s.to_string()))
    }

    /// The current month in local wall-clock time.
    pub fn current() -> Self {
        MonthKey::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The month before, or this month at the start of the representable range.
    pub fn prev(&self) -> Self {
        MonthKey(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// The month after, or this month at the end of the representable range.
    pub fn next(&self) -> Self {
        MonthKey(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Every day of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        MonthKey::of(date.date()) == *self
    }

    /// Human-readable label, e.g. "June 2024".
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for MonthKey {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        MonthKey::parse(s)
    }
}
