//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation. It dispatches
//! to the command layer and hands back a structured [`CmdResult`]. It does no
//! printing and makes no terminal assumptions, so the interactive shell is just one
//! possible client.
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<CsvFileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeUpdate};
use crate::roster::Roster;
use crate::store::DataStore;

pub struct RosterApi<S: DataStore> {
    roster: Roster<S>,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(roster: Roster<S>) -> Self {
        Self { roster }
    }

    /// Open the roster held by `store` and wrap it.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self::new(Roster::open(store)?))
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<CmdResult> {
        commands::add::run(&mut self.roster, employee)
    }

    pub fn update_employee(&mut self, id: &str, changes: &EmployeeUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.roster, id, changes)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.roster, id)
    }

    pub fn search_employee(&self, id: &str) -> Result<CmdResult> {
        commands::search::run(&self.roster, id)
    }

    pub fn list_employees(&self) -> Result<CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
