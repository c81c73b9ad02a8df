use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the backing table, in order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Position", "Salary", "Email"];

/// One employee's stored attributes.
///
/// All fields are plain text. `salary` in particular is never parsed as a number,
/// and `id` is an opaque key that is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Salary")]
    salary: String,
    #[serde(rename = "Email")]
    email: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            salary: salary.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The record as a table row, in [`COLUMNS`] order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.id,
            &self.name,
            &self.position,
            &self.salary,
            &self.email,
        ]
    }

    /// Apply the non-empty fields of `changes`. The id is never touched.
    pub fn update(&mut self, changes: &EmployeeUpdate) {
        replace_if_present(&mut self.name, &changes.name);
        replace_if_present(&mut self.position, &changes.position);
        replace_if_present(&mut self.salary, &changes.salary);
        replace_if_present(&mut self.email, &changes.email);
    }
}

fn replace_if_present(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            field.clone_from(v);
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Position: {}, Salary: {}, Email: {}",
            self.id, self.name, self.position, self.salary, self.email
        )
    }
}

/// Field changes for an update. `None` and `Some("")` both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub email: Option<String>,
}

impl EmployeeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.position, &self.salary, &self.email]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Employee {
        Employee::new("1", "Ana", "Eng", "50000", "a@x.com")
    }

    #[test]
    fn display_lists_all_fields() {
        assert_eq!(
            ana().to_string(),
            "ID: 1, Name: Ana, Position: Eng, Salary: 50000, Email: a@x.com"
        );
    }

    #[test]
    fn update_replaces_only_non_empty_fields() {
        let mut emp = ana();
        emp.update(&EmployeeUpdate::new().salary("55000").name(""));

        assert_eq!(emp.salary(), "55000");
        assert_eq!(emp.name(), "Ana");
        assert_eq!(emp.position(), "Eng");
        assert_eq!(emp.email(), "a@x.com");
        assert_eq!(emp.id(), "1");
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut emp = ana();
        let changes = EmployeeUpdate::new().email("");
        assert!(changes.is_empty());

        emp.update(&changes);
        assert_eq!(emp, ana());
    }

    #[test]
    fn fields_follow_column_order() {
        assert_eq!(ana().fields(), ["1", "Ana", "Eng", "50000", "a@x.com"]);
    }

    #[test]
    fn salary_is_kept_verbatim() {
        let emp = Employee::new("2", "Bo", "Ops", "  about 40k ", "b@x.com");
        assert_eq!(emp.salary(), "  about 40k ");
    }
}
