//! Roster overview metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Active weeks | Number of weekly slots |
//! | Total assignments | Two per week (Lead + Co-Lead) |
//! | Holidays observed | Holidays falling inside some week |
//! | Working days | Sum of working days across weeks |
//! | Duty counts | Per-employee Lead / Co-Lead tallies |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::WeeklySchedule;

/// How often one employee serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DutyCount {
    /// Weeks as Lead.
    pub lead: usize,
    /// Weeks as Co-Lead.
    pub co_lead: usize,
}

/// Roster overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    /// Number of weeks.
    pub active_weeks: usize,
    /// Lead and Co-Lead slots combined.
    pub total_assignments: usize,
    /// Holidays inside the roster's weeks.
    pub holidays_observed: usize,
    /// Working days across all weeks.
    pub working_days: usize,
    /// Duty counts keyed by employee ID.
    pub duty_counts: BTreeMap<String, DutyCount>,
}

impl DutyCount {
    /// Total weeks served in either role.
    pub fn total(&self) -> usize {
        self.lead + self.co_lead
    }
}

impl RosterSummary {
    /// Computes the overview of a roster.
    pub fn calculate<'a>(weeks: impl IntoIterator<Item = &'a WeeklySchedule>) -> Self {
        let mut active_weeks = 0;
        let mut holidays_observed = 0;
        let mut working_days = 0;
        let mut duty_counts: BTreeMap<String, DutyCount> = BTreeMap::new();

        for week in weeks {
            active_weeks += 1;
            holidays_observed += week.holidays_in_week.len();
            working_days += week.working_days.len();
            duty_counts.entry(week.lead.id.clone()).or_default().lead += 1;
            duty_counts.entry(week.co_lead.id.clone()).or_default().co_lead += 1;
        }

        Self {
            active_weeks,
            total_assignments: active_weeks * 2,
            holidays_observed,
            working_days,
            duty_counts,
        }
    }

    /// Duty count for one employee (zero if never assigned).
    pub fn duties_of(&self, employee_id: &str) -> DutyCount {
        self.duty_counts.get(employee_id).copied().unwrap_or_default()
    }

    /// Employees serving the most weeks, with that count.
    pub fn busiest(&self) -> Option<(usize, Vec<&str>)> {
        let max = self.duty_counts.values().map(DutyCount::total).max()?;
        let ids = self
            .duty_counts
            .iter()
            .filter(|(_, c)| c.total() == max)
            .map(|(id, _)| id.as_str())
            .collect();
        Some((max, ids))
    }
}
