//! Round-robin rotation pool.
//!
//! # Algorithm
//! The member for zero-based week index `i` is `members[i mod len]`.
//! There is no shuffling and no repeat avoidance beyond what the modulo
//! produces; pool length need not divide the number of weeks.

use crate::error::RosterError;
use crate::models::{find_employee, Employee, EmployeeRef, Role};

/// A non-empty, ordered pool of employees for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPool {
    role: Role,
    members: Vec<Employee>,
}

impl RotationPool {
    /// Creates a pool.
    ///
    /// Fails with [`RosterError::EmptyPool`] if `members` is empty.
    pub fn new(role: Role, members: Vec<Employee>) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::EmptyPool { role });
        }
        Ok(Self { role, members })
    }

    /// The role this pool fills.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Number of members (always at least 1).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the pool has no members (never true for a constructed pool).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in rotation order.
    pub fn members(&self) -> &[Employee] {
        &self.members
    }

    /// Round-robin pick for a zero-based week index.
    #[inline]
    pub fn pick(&self, index: usize) -> &Employee {
        &self.members[index % self.members.len()]
    }

    /// Round-robin pick for a 1-based week number.
    ///
    /// Week number 0 is treated as week 1.
    #[inline]
    pub fn pick_for_week(&self, week_number: u32) -> &Employee {
        self.pick(week_number.saturating_sub(1) as usize)
    }

    /// First member matching `reference`.
    pub fn find(&self, reference: &EmployeeRef) -> Option<&Employee> {
        find_employee(&self.members, reference)
    }
}
