use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored employee record.
///
/// `id` and `created_at` are assigned by the database on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

/// Raw request body for create and update, before validation.
///
/// Fields are optional so that a missing or `null` field is reported as a
/// validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl EmployeePayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            position: Some(position.into()),
        }
    }
}

/// Validated input for creating or replacing an employee.
///
/// Only obtainable through [`crate::validation::validate_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) position: String,
}

impl EmployeeInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

/// Query parameters for listing employees.
#[derive(Debug, Clone, Default)]
pub struct ListEmployeesQuery {
    /// Case-sensitive substring matched against name, email and position.
    pub search: Option<String>,
}

impl ListEmployeesQuery {
    /// The search term, with an empty value treated as no filter.
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
