//! Weekly rotation generator.
//!
//! # Algorithm
//!
//! 1. Build the Lead pool (general, then lower-priority) and the Co-Lead
//!    pool (priority, then general).
//! 2. Starting at the first Monday on or after the period start, while the
//!    Monday is on or before the period end:
//!    a. `index` = weeks emitted so far, `week_number = index + 1`.
//!    b. Lead = `lead_pool[index mod len]`, Co-Lead = `co_lead_pool[index mod len]`.
//!    c. Apply overrides keyed by week number (they replace the pick).
//!    d. Split Monday..=Friday into working days and holidays.
//!    e. Advance seven days.
//!
//! Co-Lead swaps read the partner's pick from the pool, never from an
//! already generated week, so the result does not depend on which week of
//! a pair is processed first.
//!
//! # Complexity
//! O(w * (h + o)) where w=weeks, h=holidays, o=overrides.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use super::RotationPool;
use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::models::{
    first_monday_on_or_after, Employee, HolidayCalendar, OverrideTable, Role, WeekSpan,
    WeeklySchedule,
};

const DAYS_PER_WEEK: u64 = 7;

/// Deterministic generator of the weekly roster.
///
/// Holds only immutable inputs; [`RotationGenerator::generate`] is a pure
/// function of them and returns the same sequence on every call.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use huddle_schedule::models::{Employee, HolidayCalendar, OverrideTable, Role};
/// use huddle_schedule::rotation::{RotationGenerator, RotationPool};
///
/// let leads = RotationPool::new(Role::Lead, vec![Employee::new("L1"), Employee::new("L2")]).unwrap();
/// let co_leads = RotationPool::new(Role::CoLead, vec![Employee::new("C1")]).unwrap();
/// let generator = RotationGenerator::new(
///     leads,
///     co_leads,
///     NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
/// )
/// .unwrap();
///
/// let weeks = generator.generate();
/// assert_eq!(weeks.len(), 4);
/// assert_eq!(weeks[1].lead.id, "L2");
/// ```
#[derive(Debug, Clone)]
pub struct RotationGenerator {
    lead_pool: RotationPool,
    co_lead_pool: RotationPool,
    holidays: HolidayCalendar,
    overrides: OverrideTable,
    first_monday: NaiveDate,
    end: NaiveDate,
}

impl RotationGenerator {
    /// Creates a generator without holidays or overrides.
    ///
    /// Fails with [`RosterError::InvalidPeriod`] if `end < start`.
    pub fn new(
        lead_pool: RotationPool,
        co_lead_pool: RotationPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, RosterError> {
        if end < start {
            return Err(RosterError::InvalidPeriod { start, end });
        }
        Ok(Self {
            lead_pool,
            co_lead_pool,
            holidays: HolidayCalendar::new(),
            overrides: OverrideTable::new(),
            first_monday: first_monday_on_or_after(start),
            end,
        })
    }

    /// Creates a generator from a loaded configuration.
    pub fn from_config(config: &RosterConfig) -> Result<Self, RosterError> {
        let lead_pool = RotationPool::new(Role::Lead, config.pools.lead_pool())?;
        let co_lead_pool = RotationPool::new(Role::CoLead, config.pools.co_lead_pool())?;

        Ok(Self::new(lead_pool, co_lead_pool, config.period.start, config.period.end)?
            .with_holidays(config.holidays.clone())
            .with_overrides(config.overrides.clone()))
    }

    /// Sets the holiday table.
    pub fn with_holidays(mut self, holidays: HolidayCalendar) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the override table.
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    /// The Lead pool.
    pub fn lead_pool(&self) -> &RotationPool {
        &self.lead_pool
    }

    /// The Co-Lead pool.
    pub fn co_lead_pool(&self) -> &RotationPool {
        &self.co_lead_pool
    }

    /// The Monday of week 1.
    pub fn first_monday(&self) -> NaiveDate {
        self.first_monday
    }

    /// Generates the full roster in week-number order.
    pub fn generate(&self) -> Vec<WeeklySchedule> {
        let mut schedules = Vec::new();
        let mut monday = self.first_monday;

        while monday <= self.end {
            let week = self.build_week(schedules.len(), monday);
            debug!(
                week = week.week_number,
                start = %week.start_date,
                lead = %week.lead.id,
                co_lead = %week.co_lead.id,
                holidays = week.holidays_in_week.len(),
                "generated week"
            );
            schedules.push(week);
            monday = monday + Days::new(DAYS_PER_WEEK);
        }

        debug!(weeks = schedules.len(), "roster generated");
        schedules
    }

    fn build_week(&self, index: usize, monday: NaiveDate) -> WeeklySchedule {
        let week_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let span = WeekSpan::starting(monday);
        let (working_days, holidays_in_week) = self.holidays.partition_week(&span);

        WeeklySchedule {
            week_number,
            start_date: span.start,
            end_date: span.end,
            lead: self.lead_for(index, week_number).clone(),
            co_lead: self.co_lead_for(index, week_number).clone(),
            working_days,
            holidays_in_week,
        }
    }

    fn lead_for(&self, index: usize, week_number: u32) -> &Employee {
        let computed = self.lead_pool.pick(index);

        let Some(reference) = self.overrides.lead_for(week_number) else {
            return computed;
        };

        match self.lead_pool.find(reference) {
            Some(employee) => employee,
            None => {
                warn!(
                    week = week_number,
                    employee = %reference,
                    "lead override matched nobody; keeping round-robin pick"
                );
                computed
            }
        }
    }

    fn co_lead_for(&self, index: usize, week_number: u32) -> &Employee {
        match self.overrides.co_lead_partner(week_number) {
            Some(partner) => self.co_lead_pool.pick_for_week(partner),
            None => self.co_lead_pool.pick(index),
        }
    }
}

/// Generates the roster described by `config`.
pub fn generate(config: &RosterConfig) -> Result<Vec<WeeklySchedule>, RosterError> {
    Ok(RotationGenerator::from_config(config)?.generate())
}
