//! Employee roster and per-report selection.
//!
//! The configured roster provides employees with positive ids. Ad-hoc
//! employees entered by name receive ids from a decreasing counter that
//! starts at -1 and is stored with the selection, so ids stay stable
//! across draft reloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
}

/// The employees selected for the current Servicebericht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSelection {
    pub selected: Vec<Employee>,
    next_custom_id: i32,
}

impl Default for EmployeeSelection {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            next_custom_id: -1,
        }
    }
}

impl EmployeeSelection {
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_employees(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Roster entries that are not selected yet.
    pub fn available<'a>(&self, roster: &'a [Employee]) -> Vec<&'a Employee> {
        roster.iter().filter(|e| !self.selected.iter().any(|s| s.id == e.id)).collect()
    }

    /// Adds a roster employee. Returns false when the id is already selected.
    pub fn add_from_roster(&mut self, employee: Employee) -> bool {
        if self.selected.iter().any(|e| e.id == employee.id) {
            return false;
        }
        self.selected.push(employee);
        true
    }

    /// Adds an ad-hoc employee under the next custom id.
    ///
    /// Returns the new entry, or None when the trimmed name is empty.
    pub fn add_custom(&mut self, name: &str) -> Option<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let employee = Employee {
            id: self.next_custom_id,
            name: name.to_string(),
        };
        self.next_custom_id -= 1;
        self.selected.push(employee.clone());
        Some(employee)
    }

    /// Removes by id. Returns the removed employee when one matched.
    pub fn remove(&mut self, id: i32) -> Option<Employee> {
        let pos = self.selected.iter().position(|e| e.id == id)?;
        Some(self.selected.remove(pos))
    }
}
