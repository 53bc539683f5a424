//! Holiday calendar and week spans.
//!
//! Defines the public-holiday table and the Monday-to-Friday span that
//! every weekly slot covers.
//!
//! # Date Model
//! All dates are civil dates (`chrono::NaiveDate`), serialized as
//! ISO `YYYY-MM-DD` strings. No time zones are involved.
//!
//! # Precedence
//! A weekday inside a span is either a working day or a holiday, never
//! both. Holidays falling on a weekend never intersect a span.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of weekdays covered by a span (Monday..=Friday).
pub const WORKING_DAYS_PER_WEEK: u64 = 5;

/// A named public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date of the holiday.
    pub date: NaiveDate,
    /// Holiday name.
    pub name: String,
}

/// A Monday-to-Friday interval [start, end], both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSpan {
    /// Monday of the week.
    pub start: NaiveDate,
    /// Friday of the same week (start + 4 days).
    pub end: NaiveDate,
}

/// Ordered table of holidays.
///
/// Lookups return the first entry for a date; later duplicates are
/// shadowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl Holiday {
    /// Creates a holiday.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Whether the holiday falls on Monday..=Friday.
    pub fn is_weekday(&self) -> bool {
        is_weekday(self.date)
    }
}

impl WeekSpan {
    /// Creates the span starting at `monday`.
    ///
    /// The caller is responsible for passing a Monday; the span is
    /// always `monday..=monday + 4 days`.
    pub fn starting(monday: NaiveDate) -> Self {
        Self {
            start: monday,
            end: monday + Days::new(WORKING_DAYS_PER_WEEK - 1),
        }
    }

    /// Whether a date falls within the span.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The five dates of the span in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..WORKING_DAYS_PER_WEEK).map(move |offset| start + Days::new(offset))
    }
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from an ordered list.
    pub fn from_holidays(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.holidays.push(Holiday::new(date, name));
        self
    }

    /// All holidays in table order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The holiday on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Splits a span into working days and holidays.
    ///
    /// Both lists are chronological; together they cover the five days of
    /// the span exactly once.
    pub fn partition_week(&self, span: &WeekSpan) -> (Vec<NaiveDate>, Vec<Holiday>) {
        let mut working_days = Vec::new();
        let mut holidays = Vec::new();

        for day in span.days() {
            match self.holiday_on(day) {
                Some(holiday) => holidays.push(holiday.clone()),
                None => working_days.push(day),
            }
        }

        (working_days, holidays)
    }
}

/// Whether a date is Monday..=Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First Monday on or after `date`.
pub fn first_monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let offset = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Days::new(u64::from(offset))
}

/// First Monday of the given month.
///
/// Returns `None` for an invalid year/month.
pub fn first_monday_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).map(first_monday_on_or_after)
}
