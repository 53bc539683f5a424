//! Read-side projections and overview metrics.
//!
//! Everything in this module is derived from a sequence of weeks on
//! every call: search filtering, grouping by month, the current week,
//! per-employee lookups, and the roster summary.

mod query;
mod summary;

pub use query::{assignments_for, current_week, filter_weeks, group_by_month, MonthKey};
pub use summary::{DutyCount, RosterSummary};
