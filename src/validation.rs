//! Input validation for roster configurations.
//!
//! Checks structural integrity of the pools, holiday table and override
//! table before generation. Detects:
//! - Empty rotation pools
//! - Inverted generation periods
//! - Duplicate employee IDs
//! - Override references that resolve to nobody
//! - Override weeks outside the generated horizon
//! - Co-Lead swaps pairing a week with itself
//! - Duplicate holiday dates
//!
//! The generator tolerates unresolved overrides by keeping the
//! round-robin pick; validation reports them so callers can fail fast.

use std::collections::HashSet;

use crate::config::RosterConfig;
use crate::models::{find_employee, first_monday_on_or_after, Role};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A rotation pool has no members.
    EmptyPool,
    /// The period end precedes its start.
    InvalidPeriod,
    /// Two employees share the same ID.
    DuplicateId,
    /// An override references no pool member.
    UnresolvedOverride,
    /// An override names a week the period never generates.
    WeekOutOfHorizon,
    /// A Co-Lead swap pairs a week with itself.
    SelfSwap,
    /// Two holidays share a date.
    DuplicateHoliday,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Number of weeks the period generates (0 for an inverted period).
pub fn horizon_weeks(config: &RosterConfig) -> u32 {
    let first = first_monday_on_or_after(config.period.start);
    if first > config.period.end {
        return 0;
    }
    let days = (config.period.end - first).num_days();
    u32::try_from(days / 7 + 1).unwrap_or(u32::MAX)
}

/// Validates a roster configuration.
///
/// Checks:
/// 1. Both combined pools are non-empty
/// 2. The period end is not before its start
/// 3. No duplicate employee IDs across all lists
/// 4. Every lead override resolves against the Lead pool
/// 5. Every override week lies within the generated horizon
/// 6. No Co-Lead swap pairs a week with itself
/// 7. No duplicate holiday dates
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let lead_pool = config.pools.lead_pool();
    if lead_pool.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            format!("{} pool is empty", Role::Lead),
        ));
    }
    if config.pools.co_lead_pool().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            format!("{} pool is empty", Role::CoLead),
        ));
    }

    if config.period.end < config.period.start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPeriod,
            format!(
                "Period end {} is before start {}",
                config.period.end, config.period.start
            ),
        ));
    }

    let mut ids = HashSet::new();
    for employee in config.pools.all() {
        if !ids.insert(employee.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", employee.id),
            ));
        }
    }

    let horizon = horizon_weeks(config);
    let in_horizon = |week: u32| week >= 1 && week <= horizon;

    for rule in &config.overrides.lead {
        if find_employee(&lead_pool, &rule.employee).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnresolvedOverride,
                format!(
                    "Lead override for week {} references unknown employee {}",
                    rule.week, rule.employee
                ),
            ));
        }
        if !in_horizon(rule.week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeekOutOfHorizon,
                format!(
                    "Lead override week {} is outside weeks 1..={horizon}",
                    rule.week
                ),
            ));
        }
    }

    for swap in &config.overrides.co_lead_swaps {
        let [a, b] = swap.weeks;
        if a == b {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfSwap,
                format!("Co-Lead swap pairs week {a} with itself"),
            ));
        }
        for week in [a, b] {
            if !in_horizon(week) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::WeekOutOfHorizon,
                    format!("Co-Lead swap week {week} is outside weeks 1..={horizon}"),
                ));
            }
        }
    }

    let mut dates = HashSet::new();
    for holiday in config.holidays.holidays() {
        if !dates.insert(holiday.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateHoliday,
                format!("Duplicate holiday date: {}", holiday.date),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
