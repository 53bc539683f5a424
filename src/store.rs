//! Mutable roster state.
//!
//! `ScheduleStore` holds the current sequence of weeks, initialized from a
//! [`RotationGenerator`], and accepts the operator's edits: swapping
//! assignees between two weeks and adding or removing holidays.
//!
//! # Copy-on-write
//! Entries are shared `Arc`s. An edit builds a new record and replaces
//! the entry; it never mutates a record in place. Snapshots taken before
//! an edit keep seeing the old records, and untouched entries stay
//! pointer-equal across edits.
//!
//! # Concurrency
//! Single owner, no locking. Concurrent editors are not supported.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::models::{Holiday, Role, WeeklySchedule};
use crate::rotation::RotationGenerator;

/// Which assignees a swap exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapScope {
    /// Exchange Leads only.
    Lead,
    /// Exchange Co-Leads only.
    #[serde(rename = "colead")]
    CoLead,
    /// Exchange both.
    Both,
}

/// Outcome of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    /// What was exchanged.
    pub scope: SwapScope,
    /// Week numbers of the two weeks involved.
    pub weeks: [u32; 2],
}

/// Current roster plus the generator needed to reset it.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    generator: RotationGenerator,
    weeks: Vec<Arc<WeeklySchedule>>,
}

impl SwapScope {
    /// Whether this scope exchanges the given role.
    pub fn includes(self, role: Role) -> bool {
        matches!(
            (self, role),
            (SwapScope::Both, _) | (SwapScope::Lead, Role::Lead) | (SwapScope::CoLead, Role::CoLead)
        )
    }
}

impl fmt::Display for SwapScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SwapScope::Lead => "lead",
            SwapScope::CoLead => "colead",
            SwapScope::Both => "both",
        })
    }
}

impl FromStr for SwapScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lead" => Ok(SwapScope::Lead),
            "colead" | "co-lead" | "co_lead" => Ok(SwapScope::CoLead),
            "both" => Ok(SwapScope::Both),
            other => Err(format!(
                "unknown swap scope '{other}' (expected lead, colead or both)"
            )),
        }
    }
}

impl fmt::Display for SwapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully swapped {} assignments!", self.scope)
    }
}

impl ScheduleStore {
    /// Creates a store holding the generator's output.
    pub fn new(generator: RotationGenerator) -> Self {
        let weeks = fresh_weeks(&generator);
        Self { generator, weeks }
    }

    /// Creates a store from a loaded configuration.
    pub fn from_config(config: &RosterConfig) -> Result<Self, RosterError> {
        Ok(Self::new(RotationGenerator::from_config(config)?))
    }

    /// Number of weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the store holds no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// The week at `index`.
    pub fn get(&self, index: usize) -> Option<&WeeklySchedule> {
        self.weeks.get(index).map(Arc::as_ref)
    }

    /// Weeks in order.
    pub fn iter(&self) -> impl Iterator<Item = &WeeklySchedule> {
        self.weeks.iter().map(Arc::as_ref)
    }

    /// Index of the week with the given week number.
    pub fn position_of(&self, week_number: u32) -> Option<usize> {
        self.weeks.iter().position(|w| w.week_number == week_number)
    }

    /// Cheap snapshot sharing the current records.
    pub fn snapshot(&self) -> Vec<Arc<WeeklySchedule>> {
        self.weeks.clone()
    }

    /// Owned copy of the current weeks.
    pub fn to_schedules(&self) -> Vec<WeeklySchedule> {
        self.iter().cloned().collect()
    }

    /// The generator backing [`ScheduleStore::reset`].
    pub fn generator(&self) -> &RotationGenerator {
        &self.generator
    }

    /// Exchanges assignees between the weeks at `index_a` and `index_b`.
    ///
    /// Any two distinct weeks may be swapped. Equal indices are rejected
    /// with [`RosterError::SameWeek`].
    pub fn swap(
        &mut self,
        index_a: usize,
        index_b: usize,
        scope: SwapScope,
    ) -> Result<SwapReport, RosterError> {
        if index_a == index_b {
            return Err(RosterError::SameWeek { index: index_a });
        }
        let mut week_a = self.week_at(index_a)?.clone();
        let mut week_b = self.week_at(index_b)?.clone();

        if scope.includes(Role::Lead) {
            std::mem::swap(&mut week_a.lead, &mut week_b.lead);
        }
        if scope.includes(Role::CoLead) {
            std::mem::swap(&mut week_a.co_lead, &mut week_b.co_lead);
        }

        let report = SwapReport {
            scope,
            weeks: [week_a.week_number, week_b.week_number],
        };
        self.weeks[index_a] = Arc::new(week_a);
        self.weeks[index_b] = Arc::new(week_b);

        info!(
            week_a = report.weeks[0],
            week_b = report.weeks[1],
            scope = %scope,
            "swapped assignments"
        );
        Ok(report)
    }

    /// Adds a holiday to the week at `week_index`.
    ///
    /// `date` must lie within the week's [start_date, end_date]; otherwise
    /// the store is left unchanged. The date is removed from the working
    /// days if present. Duplicate dates are not deduplicated.
    pub fn add_holiday(
        &mut self,
        week_index: usize,
        name: impl Into<String>,
        date: NaiveDate,
    ) -> Result<(), RosterError> {
        let current = self.week_at(week_index)?;
        if !current.contains(date) {
            return Err(RosterError::HolidayOutOfRange {
                date,
                start: current.start_date,
                end: current.end_date,
            });
        }

        let mut week = current.clone();
        week.holidays_in_week.push(Holiday::new(date, name));
        week.working_days.retain(|d| *d != date);

        info!(week = week.week_number, %date, "added holiday");
        self.weeks[week_index] = Arc::new(week);
        Ok(())
    }

    /// Removes the holiday at `holiday_index` from the week at `week_index`.
    ///
    /// A weekday date goes back into the working days, kept sorted, unless
    /// another holiday in the week still covers it. Weekend dates are
    /// dropped. Returns the removed holiday.
    pub fn remove_holiday(
        &mut self,
        week_index: usize,
        holiday_index: usize,
    ) -> Result<Holiday, RosterError> {
        let current = self.week_at(week_index)?;
        if holiday_index >= current.holidays_in_week.len() {
            return Err(RosterError::HolidayIndexOutOfRange {
                week: current.week_number,
                index: holiday_index,
                len: current.holidays_in_week.len(),
            });
        }

        let mut week = current.clone();
        let removed = week.holidays_in_week.remove(holiday_index);

        let still_covered = week.holidays_in_week.iter().any(|h| h.date == removed.date);
        if removed.is_weekday() && !still_covered {
            if let Err(pos) = week.working_days.binary_search(&removed.date) {
                week.working_days.insert(pos, removed.date);
            }
        }

        info!(week = week.week_number, date = %removed.date, "removed holiday");
        self.weeks[week_index] = Arc::new(week);
        Ok(removed)
    }

    /// Discards all edits and regenerates from the generator.
    pub fn reset(&mut self) {
        self.weeks = fresh_weeks(&self.generator);
        info!(weeks = self.weeks.len(), "schedule reset");
    }

    fn week_at(&self, index: usize) -> Result<&WeeklySchedule, RosterError> {
        self.get(index).ok_or(RosterError::WeekOutOfRange {
            index,
            len: self.weeks.len(),
        })
    }
}

fn fresh_weeks(generator: &RotationGenerator) -> Vec<Arc<WeeklySchedule>> {
    generator.generate().into_iter().map(Arc::new).collect()
}
