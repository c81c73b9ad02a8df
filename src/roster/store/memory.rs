use super::DataStore;
use crate::error::Result;
use crate::model::Employee;

/// Volatile store for tests. Remembers the last saved table and how many times
/// `save` was called.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted table.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            saves: 0,
        }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn persisted(&self) -> &[Employee] {
        &self.employees
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.employees = employees.to_vec();
        self.saves += 1;
        Ok(())
    }
}
