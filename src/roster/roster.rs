//! # Roster
//!
//! [`Roster`] owns the in-memory employee collection and keeps its [`DataStore`]
//! in sync with it. Every mutating call that changes the collection writes the
//! whole table back before returning; lookups that miss leave storage alone.
//!
//! The collection is an ordered `Vec`. Ids are not unique: `add` never checks for
//! an existing id, and every lookup resolves to the first match in stored order.

use crate::error::Result;
use crate::model::{Employee, EmployeeUpdate};
use crate::store::DataStore;
use tracing::{debug, info};

pub struct Roster<S: DataStore> {
    store: S,
    employees: Vec<Employee>,
}

impl<S: DataStore> Roster<S> {
    /// Open a roster over `store`, loading whatever it already holds.
    pub fn open(store: S) -> Result<Self> {
        let mut roster = Self {
            store,
            employees: Vec::new(),
        };
        roster.load()?;
        Ok(roster)
    }

    /// Replace the in-memory collection with the persisted table.
    pub fn load(&mut self) -> Result<()> {
        self.employees = self.store.load()?;
        info!(count = self.employees.len(), "roster loaded");
        Ok(())
    }

    /// Write the full collection to storage.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.employees)
    }

    pub fn add(&mut self, employee: Employee) -> Result<()> {
        debug!(id = employee.id(), "adding employee");
        self.employees.push(employee);
        self.save()
    }

    /// Returns `false` without writing when no employee has `id`.
    pub fn update(&mut self, id: &str, changes: &EmployeeUpdate) -> Result<bool> {
        let Some(employee) = self.employees.iter_mut().find(|e| e.id() == id) else {
            debug!(id, "update target not found");
            return Ok(false);
        };
        employee.update(changes);
        self.save()?;
        Ok(true)
    }

    /// Removes the first employee with `id`. Returns `false` without writing when
    /// there is none.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.employees.iter().position(|e| e.id() == id) else {
            debug!(id, "delete target not found");
            return Ok(false);
        };
        self.employees.remove(pos);
        self.save()?;
        Ok(true)
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
