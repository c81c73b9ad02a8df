//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the roster. A backend only
//! knows how to read and write the whole employee table; ordering, lookup and
//! write-through live in [`crate::roster::Roster`].
//!
//! ## Implementations
//!
//! - [`fs::CsvFileStore`]: production storage, one CSV file
//!   - Header row `ID,Name,Position,Salary,Email`
//!   - One row per employee, in collection order
//!   - A missing file reads as an empty table
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert on write-through
//!
//! ## Storage Format
//!
//! ```text
//! ID,Name,Position,Salary,Email
//! 1,Ana,Eng,50000,a@x.com
//! 2,"Doe, Jane",Ops,42000,j@x.com
//! ```
//!
//! The whole file is rewritten on every save. There is no crash safety: a process
//! killed mid-write can leave a truncated table behind.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait DataStore {
    /// Read the full table. A store with nothing persisted yet returns an empty Vec.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the persisted table with `employees`.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
