//! Read-side queries over a roster.
//!
//! Pure projections: nothing here is stored, every call recomputes from
//! the weeks it is given.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::format::Locale;
use crate::models::WeeklySchedule;

/// Calendar month used to group weeks.
///
/// Ordered chronologically; unique per (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// Gregorian year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
}

impl MonthKey {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Display label in the given locale.
    pub fn label(&self, locale: Locale) -> String {
        locale.month_label(self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Weeks whose Lead or Co-Lead name or department contains `term`,
/// ignoring case. An empty term matches every week.
pub fn filter_weeks<'a>(
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
    term: &str,
) -> Vec<&'a WeeklySchedule> {
    let needle = term.trim().to_lowercase();
    weeks
        .into_iter()
        .filter(|w| {
            needle.is_empty() || w.lead.matches_search(&needle) || w.co_lead.matches_search(&needle)
        })
        .collect()
}

/// Weeks grouped by the month of their start date, in calendar order.
pub fn group_by_month<'a>(
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
) -> BTreeMap<MonthKey, Vec<&'a WeeklySchedule>> {
    let mut groups: BTreeMap<MonthKey, Vec<&WeeklySchedule>> = BTreeMap::new();
    for week in weeks {
        groups.entry(MonthKey::of(week.start_date)).or_default().push(week);
    }
    groups
}

/// The week containing `today`, or the first week if none does.
///
/// Weekend dates fall outside every Monday-to-Friday span and therefore
/// resolve to the first week. Returns `None` only for an empty roster.
pub fn current_week<'a>(
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
    today: NaiveDate,
) -> Option<&'a WeeklySchedule> {
    let mut iter = weeks.into_iter();
    let first = iter.next()?;
    if first.contains(today) {
        return Some(first);
    }
    Some(iter.find(|w| w.contains(today)).unwrap_or(first))
}

/// Weeks where `employee_id` serves in either role.
pub fn assignments_for<'a>(
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
    employee_id: &str,
) -> Vec<&'a WeeklySchedule> {
    weeks.into_iter().filter(|w| w.involves(employee_id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Holiday};
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week(number: u32, monday: NaiveDate, lead: Employee, co_lead: Employee) -> WeeklySchedule {
        let working_days = (0..5).map(|i| monday + Days::new(i)).collect();
        WeeklySchedule {
            week_number: number,
            start_date: monday,
            end_date: monday + Days::new(4),
            lead,
            co_lead,
            working_days,
            holidays_in_week: Vec::<Holiday>::new(),
        }
    }

    fn sample_weeks() -> Vec<WeeklySchedule> {
        let pharmacy = Employee::new("GM05")
            .with_name("Siri Karda")
            .with_department("Pharmacy");
        let imaging = Employee::new("GM03")
            .with_name("Saeng Sringam")
            .with_department("Imaging");
        let icu = Employee::new("GH04")
            .with_name("Supawadee")
            .with_department("Intensive Care Unit");
        let er = Employee::new("GH15")
            .with_name("Parichat")
            .with_department("Emergency");

        vec![
            week(1, date(2026, 2, 23), pharmacy.clone(), icu.clone()),
            week(2, date(2026, 3, 2), imaging.clone(), er.clone()),
            week(3, date(2026, 3, 30), pharmacy, er),
            week(4, date(2026, 4, 6), imaging, icu),
        ]
    }

    #[test]
    fn test_filter_by_name_and_department() {
        let weeks = sample_weeks();
        let hits: Vec<u32> = filter_weeks(&weeks, "PHARM").iter().map(|w| w.week_number).collect();
        assert_eq!(hits, vec![1, 3]);

        let hits: Vec<u32> = filter_weeks(&weeks, "parichat").iter().map(|w| w.week_number).collect();
        assert_eq!(hits, vec![2, 3]);

        assert!(filter_weeks(&weeks, "cardiology").is_empty());
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let weeks = sample_weeks();
        assert_eq!(filter_weeks(&weeks, "").len(), 4);
        assert_eq!(filter_weeks(&weeks, "   ").len(), 4);
    }

    #[test]
    fn test_group_by_month_uses_start_date() {
        let weeks = sample_weeks();
        let groups = group_by_month(&weeks);
        let keys: Vec<String> = groups.keys().map(|k| k.to_string()).collect();
        // Week 3 ends in April but starts in March
        assert_eq!(keys, vec!["2026-02", "2026-03", "2026-04"]);
        assert_eq!(groups[&MonthKey { year: 2026, month: 3 }].len(), 2);
    }

    #[test]
    fn test_month_key_unique_across_years() {
        let jan_26 = MonthKey::of(date(2026, 1, 5));
        let jan_27 = MonthKey::of(date(2027, 1, 4));
        assert_ne!(jan_26, jan_27);
        assert!(jan_26 < jan_27);
        assert_eq!(jan_27.label(Locale::Thai), "มกราคม 2570");
    }

    #[test]
    fn test_current_week() {
        let weeks = sample_weeks();
        assert_eq!(current_week(&weeks, date(2026, 3, 4)).unwrap().week_number, 2);
        assert_eq!(current_week(&weeks, date(2026, 4, 10)).unwrap().week_number, 4);
        // Weekend and out-of-range dates fall back to the first week
        assert_eq!(current_week(&weeks, date(2026, 3, 7)).unwrap().week_number, 1);
        assert_eq!(current_week(&weeks, date(2030, 1, 1)).unwrap().week_number, 1);
        assert!(current_week(&Vec::<WeeklySchedule>::new(), date(2026, 3, 4)).is_none());
    }

    #[test]
    fn test_assignments_for() {
        let weeks = sample_weeks();
        let ids: Vec<u32> = assignments_for(&weeks, "GH15").iter().map(|w| w.week_number).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(assignments_for(&weeks, "XX").is_empty());
    }
}
