//! Weekly schedule model.
//!
//! A weekly schedule is one slot of the roster: a Monday-to-Friday span,
//! the Lead and Co-Lead serving that week, and the split of its five
//! weekdays into working days and holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Employee, Holiday, Role, WeekSpan};

/// One week of the roster.
///
/// # Invariants
/// - `start_date` is a Monday and `end_date == start_date + 4 days`.
/// - `working_days` and the dates of `holidays_in_week` partition the five
///   weekdays of the span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// 1-based sequential week number.
    pub week_number: u32,
    /// Monday of the week.
    pub start_date: NaiveDate,
    /// Friday of the week.
    pub end_date: NaiveDate,
    /// Lead for the week.
    pub lead: Employee,
    /// Co-Lead for the week.
    pub co_lead: Employee,
    /// Weekdays that are not holidays, chronological.
    pub working_days: Vec<NaiveDate>,
    /// Holidays inside the span.
    pub holidays_in_week: Vec<Holiday>,
}

impl WeeklySchedule {
    /// The span this week covers.
    #[inline]
    pub fn span(&self) -> WeekSpan {
        WeekSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Whether a date falls within [start_date, end_date].
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.span().contains(date)
    }

    /// The employee serving `role` this week.
    pub fn assignee(&self, role: Role) -> &Employee {
        match role {
            Role::Lead => &self.lead,
            Role::CoLead => &self.co_lead,
        }
    }

    /// Whether the employee serves in either role this week.
    pub fn involves(&self, employee_id: &str) -> bool {
        self.lead.id == employee_id || self.co_lead.id == employee_id
    }

    /// Whether any holiday falls inside the week.
    pub fn has_holidays(&self) -> bool {
        !self.holidays_in_week.is_empty()
    }

    /// Holiday names joined with `"; "`.
    pub fn holiday_names(&self) -> String {
        self.holidays_in_week
            .iter()
            .map(|h| h.name.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_week() -> WeeklySchedule {
        WeeklySchedule {
            week_number: 11,
            start_date: date(2026, 4, 13),
            end_date: date(2026, 4, 17),
            lead: Employee::new("GM11").with_name("Lead Person"),
            co_lead: Employee::new("PH11").with_name("Co Person"),
            working_days: vec![date(2026, 4, 16), date(2026, 4, 17)],
            holidays_in_week: vec![
                Holiday::new(date(2026, 4, 13), "Songkran Festival"),
                Holiday::new(date(2026, 4, 14), "Songkran Festival"),
                Holiday::new(date(2026, 4, 15), "Songkran Festival"),
            ],
        }
    }

    #[test]
    fn test_assignee_and_involves() {
        let w = sample_week();
        assert_eq!(w.assignee(Role::Lead).id, "GM11");
        assert_eq!(w.assignee(Role::CoLead).id, "PH11");
        assert!(w.involves("PH11"));
        assert!(!w.involves("GM01"));
    }

    #[test]
    fn test_contains() {
        let w = sample_week();
        assert!(w.contains(date(2026, 4, 13)));
        assert!(w.contains(date(2026, 4, 17)));
        assert!(!w.contains(date(2026, 4, 12)));
        assert!(!w.contains(date(2026, 4, 18)));
    }

    #[test]
    fn test_holiday_names() {
        let w = sample_week();
        assert!(w.has_holidays());
        assert_eq!(
            w.holiday_names(),
            "Songkran Festival; Songkran Festival; Songkran Festival"
        );
    }

    #[test]
    fn test_serde_field_dates() {
        let w = sample_week();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["start_date"], "2026-04-13");
        assert_eq!(json["working_days"][0], "2026-04-16");
        let back: WeeklySchedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, w);
    }
}
