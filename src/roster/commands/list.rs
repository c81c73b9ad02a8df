use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_employees(roster.list().to_vec());
    if result.listed_employees.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No employees found!")));
    }
    Ok(result)
}
