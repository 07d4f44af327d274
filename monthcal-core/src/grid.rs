//! Month grid layout: weeks start on Sunday, days before the 1st are blank cells.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::date::MonthKey;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone)]
pub struct MonthGrid {
    month: MonthKey,
    leading_blanks: usize,
    days: Vec<NaiveDate>,
}

impl MonthGrid {
    pub fn new(month: MonthKey) -> Self {
        let leading_blanks = month.first_day().weekday().num_days_from_sunday() as usize;
        MonthGrid {
            month,
            leading_blanks,
            days: month.days().collect(),
        }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// Number of empty cells before the 1st.
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Rows of seven cells. Padding cells before the 1st and after the last day are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let cells: Vec<Option<NaiveDate>> = std::iter::repeat_n(None, self.leading_blanks)
            .chain(self.days.iter().copied().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
