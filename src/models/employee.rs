//! Employee model.
//!
//! Employees are the people who fill the two rotating roles. They are
//! reference data: loaded once from configuration, copied by value into
//! every week they serve, never created or destroyed at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person who can be assigned to a weekly slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Stable identifier (e.g., "GM01").
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Owning department.
    pub department: String,
}

/// The two rotating roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Primary role, filled from the manager pool.
    Lead,
    /// Secondary role, filled from the department-head pool.
    CoLead,
}

/// A reference to an employee from an override rule.
///
/// `Id` matches exactly. `Name` matches any employee whose name contains
/// the given text, first match in pool order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRef {
    /// Exact match on [`Employee::id`].
    Id(String),
    /// Substring match on [`Employee::name`].
    Name(String),
}

impl Employee {
    /// Creates an employee with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            position: String::new(),
            department: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the job title.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Whether this employee is the one referenced.
    pub fn matches(&self, reference: &EmployeeRef) -> bool {
        match reference {
            EmployeeRef::Id(id) => self.id == *id,
            EmployeeRef::Name(fragment) => self.name.contains(fragment.as_str()),
        }
    }

    /// Case-insensitive match against name or department.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.department.to_lowercase().contains(needle)
    }
}

impl Role {
    /// Human-readable role label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Lead => "Lead",
            Role::CoLead => "Co-Lead",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EmployeeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeRef::Id(id) => write!(f, "id '{id}'"),
            EmployeeRef::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

/// Finds the first employee in `pool` matching `reference`.
pub fn find_employee<'a>(pool: &'a [Employee], reference: &EmployeeRef) -> Option<&'a Employee> {
    pool.iter().find(|e| e.matches(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> Vec<Employee> {
        vec![
            Employee::new("GM01")
                .with_name("Alice Ward")
                .with_position("Deputy Manager")
                .with_department("Nursing"),
            Employee::new("GM02")
                .with_name("Bob Marsh")
                .with_position("Pharmacy Manager")
                .with_department("Pharmacy"),
            Employee::new("GM03")
                .with_name("Alice Marsh")
                .with_department("Imaging"),
        ]
    }

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("PH01")
            .with_name("Carol")
            .with_position("Cashier HOD")
            .with_department("Cashier");
        assert_eq!(e.id, "PH01");
        assert_eq!(e.name, "Carol");
        assert_eq!(e.position, "Cashier HOD");
        assert_eq!(e.department, "Cashier");
    }

    #[test]
    fn test_find_by_id() {
        let pool = sample_pool();
        let found = find_employee(&pool, &EmployeeRef::Id("GM02".into())).unwrap();
        assert_eq!(found.name, "Bob Marsh");
        assert!(find_employee(&pool, &EmployeeRef::Id("GM2".into())).is_none());
    }

    #[test]
    fn test_find_by_name_takes_first_match() {
        let pool = sample_pool();
        let found = find_employee(&pool, &EmployeeRef::Name("Marsh".into())).unwrap();
        assert_eq!(found.id, "GM02");
        assert!(find_employee(&pool, &EmployeeRef::Name("Zed".into())).is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let pool = sample_pool();
        assert!(pool[1].matches_search("pharm"));
        assert!(pool[0].matches_search("ward"));
        assert!(!pool[2].matches_search("nursing"));
    }

    #[test]
    fn test_employee_ref_serde() {
        let by_id: EmployeeRef = serde_json::from_str(r#"{"id":"GM23"}"#).unwrap();
        assert_eq!(by_id, EmployeeRef::Id("GM23".into()));
        let by_name: EmployeeRef = serde_json::from_str(r#"{"name":"Rat"}"#).unwrap();
        assert_eq!(by_name, EmployeeRef::Name("Rat".into()));
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Lead.to_string(), "Lead");
        assert_eq!(Role::CoLead.to_string(), "Co-Lead");
    }
}
