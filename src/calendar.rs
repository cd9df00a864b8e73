//! Month grid and selection rules for the date picker.

use chrono::{Datelike, Local, Months, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{day} is before {today}")]
pub struct DateInPast {
    pub day: NaiveDate,
    pub today: NaiveDate,
}

/// Current local day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days before today cannot be booked; today itself can
pub fn is_selectable(day: NaiveDate, today: NaiveDate) -> bool {
    day >= today
}

pub fn select(day: NaiveDate, today: NaiveDate) -> Result<NaiveDate, DateInPast> {
    if is_selectable(day, today) {
        Ok(day)
    } else {
        Err(DateInPast { day, today })
    }
}

/// A displayed month, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// e.g. `July 2025`
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first
            .iter_days()
            .take_while(move |d| d.month() == self.first.month())
    }

    /// Weeks of the month, Sunday first. Days of neighbouring months are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = self.first.weekday().num_days_from_sunday() as usize;

        for day in self.days() {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }
}
