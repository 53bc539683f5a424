//! Date formatting for display.
//!
//! Renders ISO dates as long dates and month labels in one of two
//! locales. Thai output uses Thai month names and the Buddhist-era year
//! (Gregorian + 543).
//!
//! Grouping never depends on these strings; see [`crate::view::MonthKey`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset between the Buddhist era and the Gregorian calendar.
const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// Thai months, Buddhist-era years.
    #[default]
    #[serde(rename = "th")]
    Thai,
    /// English months, Gregorian years.
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Full month name (`month` is 1-based).
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Locale::Thai => &THAI_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    /// Year as displayed in this locale.
    pub fn display_year(self, year: i32) -> i32 {
        match self {
            Locale::Thai => year + BUDDHIST_ERA_OFFSET,
            Locale::English => year,
        }
    }

    /// Long date: day, full month name, year (e.g. `2 กุมภาพันธ์ 2569`).
    pub fn long_date(self, date: NaiveDate) -> String {
        format!(
            "{} {} {}",
            date.day(),
            self.month_name(date.month()),
            self.display_year(date.year())
        )
    }

    /// Day and month without year (e.g. `2 February`).
    pub fn day_month(self, date: NaiveDate) -> String {
        format!("{} {}", date.day(), self.month_name(date.month()))
    }

    /// Month label (e.g. `กุมภาพันธ์ 2569`).
    pub fn month_label(self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), self.display_year(year))
    }

    /// Week range label: `2 - 6 February` style, naming the month of the end date.
    pub fn week_range(self, start: NaiveDate, end: NaiveDate) -> String {
        format!("{} - {}", start.day(), self.day_month(end))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Thai => f.write_str("th"),
            Locale::English => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "th" | "th-th" | "thai" => Ok(Locale::Thai),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            other => Err(format!("unknown locale '{other}' (expected 'th' or 'en')")),
        }
    }
}
