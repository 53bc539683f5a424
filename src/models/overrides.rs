//! Manual override rules.
//!
//! Overrides are one-off exceptions applied after the round-robin pick,
//! keyed by week number. Two independent kinds exist:
//!
//! - **Lead replacement**: a week's Lead becomes a named pool member.
//! - **Co-Lead swap**: two weeks exchange the Co-Leads that plain
//!   round-robin would have produced for them.
//!
//! Both tables may be empty.

use serde::{Deserialize, Serialize};

use super::EmployeeRef;

/// Replaces the round-robin Lead of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadOverride {
    /// 1-based week number.
    pub week: u32,
    /// Who takes the slot.
    pub employee: EmployeeRef,
}

/// Exchanges round-robin Co-Leads between two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoLeadSwap {
    /// The two 1-based week numbers.
    pub weeks: [u32; 2],
}

/// All manual overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideTable {
    /// Lead replacements.
    #[serde(default)]
    pub lead: Vec<LeadOverride>,
    /// Co-Lead pairwise swaps.
    #[serde(default)]
    pub co_lead_swaps: Vec<CoLeadSwap>,
}

impl LeadOverride {
    /// Creates a lead override.
    pub fn new(week: u32, employee: EmployeeRef) -> Self {
        Self { week, employee }
    }
}

impl CoLeadSwap {
    /// Creates a swap between weeks `a` and `b`.
    pub fn new(a: u32, b: u32) -> Self {
        Self { weeks: [a, b] }
    }

    /// The partner of `week` in this swap, if `week` is part of it.
    pub fn partner_of(&self, week: u32) -> Option<u32> {
        match self.weeks {
            [a, b] if a == week => Some(b),
            [a, b] if b == week => Some(a),
            _ => None,
        }
    }
}

impl OverrideTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lead override.
    pub fn with_lead(mut self, week: u32, employee: EmployeeRef) -> Self {
        self.lead.push(LeadOverride::new(week, employee));
        self
    }

    /// Adds a co-lead swap.
    pub fn with_co_lead_swap(mut self, a: u32, b: u32) -> Self {
        self.co_lead_swaps.push(CoLeadSwap::new(a, b));
        self
    }

    /// Whether no overrides are defined.
    pub fn is_empty(&self) -> bool {
        self.lead.is_empty() && self.co_lead_swaps.is_empty()
    }

    /// The lead override for `week` (first match).
    pub fn lead_for(&self, week: u32) -> Option<&EmployeeRef> {
        self.lead
            .iter()
            .find(|o| o.week == week)
            .map(|o| &o.employee)
    }

    /// The week whose round-robin Co-Lead `week` takes (first match).
    pub fn co_lead_partner(&self, week: u32) -> Option<u32> {
        self.co_lead_swaps.iter().find_map(|s| s.partner_of(week))
    }
}
