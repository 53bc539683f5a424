//! Roster domain models.
//!
//! Provides the core data types for the weekly rotation: the people
//! who rotate, the holiday table, the override rules, and the weekly
//! slots the generator produces.
//!
//! # Domain Mappings
//!
//! | huddle-schedule | Meaning |
//! |-----------------|---------|
//! | Employee | A manager or department head |
//! | Role | Lead (manager pool) / Co-Lead (department-head pool) |
//! | WeeklySchedule | One Monday-to-Friday slot with its two assignees |
//! | HolidayCalendar | Public holidays excluded from working days |
//! | OverrideTable | One-off manual exceptions to the rotation |

mod calendar;
mod employee;
mod overrides;
mod schedule;

pub use calendar::{
    first_monday_of_month, first_monday_on_or_after, is_weekday, Holiday, HolidayCalendar,
    WeekSpan, WORKING_DAYS_PER_WEEK,
};
pub use employee::{find_employee, Employee, EmployeeRef, Role};
pub use overrides::{CoLeadSwap, LeadOverride, OverrideTable};
pub use schedule::WeeklySchedule;
